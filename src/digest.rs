//! Drives padding, schedule expansion and compression over a whole message.

use crate::compression::{compress, HashState};
use crate::error::Result;
use crate::message::Message;

/// Compute the final state for `message`.
pub fn digest(message: &Message) -> Result<HashState> {
    digest_with(message, |_, _| {})
}

/// Compute the final state, calling `observer` with each block index and the
/// state produced by that block.
pub fn digest_with<F>(message: &Message, mut observer: F) -> Result<HashState>
where
    F: FnMut(usize, &HashState),
{
    let mut state = HashState::initial();
    for index in 0..message.block_count()? {
        state = compress(&state, message.schedule(index)?);
        observer(index, &state);
    }
    Ok(state)
}

/// SHA-256 of `bytes` as 64 lowercase hex characters.
pub fn hash(bytes: &[u8]) -> Result<String> {
    Ok(digest(&Message::new(bytes))?.to_hex())
}

/// SHA-256 of the UTF-8 encoding of `text`.
pub fn hash_str(text: &str) -> Result<String> {
    hash(text.as_bytes())
}
