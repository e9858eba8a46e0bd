//! Error types for the hashing engine.

use thiserror::Error;

/// Contract violations detected by the hashing engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HashError {
    #[error("invalid word length: expected 4 bytes, got {actual}")]
    InvalidLength { actual: usize },

    #[error("integer {0} does not fit in a 32-bit word")]
    IntegerOutOfRange(u64),

    #[error("invalid binary literal: {0}")]
    InvalidBinary(String),

    #[error("shift amount {0} exceeds 32")]
    ShiftOutOfRange(u32),

    #[error("padding for a {bit_len}-bit message does not land on a byte boundary")]
    PaddingAlignment { bit_len: u64 },

    #[error("block index {index} out of range for {count} blocks")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("schedule must hold 64 words, got {0}")]
    ScheduleLength(usize),
}

/// Result type for hashing operations.
pub type Result<T> = std::result::Result<T, HashError>;
