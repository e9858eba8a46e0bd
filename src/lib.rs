//! SHA-256 computed from first principles.
//!
//! The engine is split the way the algorithm is described: 32-bit [`Word`]
//! arithmetic, [`Message`] padding and block segmentation, per-block
//! [`schedule`] expansion, the 64-round [`compression`] function, and the
//! [`digest`] driver that chains blocks together.
//!
//! ```
//! let hex = scratch_sha256::hash_str("abc").unwrap();
//! assert_eq!(
//!     hex,
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

pub mod compression;
pub mod constants;
pub mod digest;
pub mod error;
pub mod message;
pub mod schedule;
pub mod word;

pub use compression::HashState;
pub use digest::{digest, digest_with, hash, hash_str};
pub use error::{HashError, Result};
pub use message::Message;
pub use schedule::Schedule;
pub use word::Word;
