//! Input helpers that feed text or file contents into the hashing engine.

use anyhow::{Context, Result};
use scratch_sha256::{digest_with, HashState, Message};
use std::fs;
use std::path::{Path, PathBuf};

use crate::transcript::Transcript;

/// Where the bytes to hash came from.
pub(crate) enum Input {
    Text(String),
    File(PathBuf),
}

/// Load the message bytes for an input fully into memory.
pub(crate) fn load_message(input: &Input) -> Result<Message> {
    match input {
        Input::Text(text) => Ok(Message::from_text(text)),
        Input::File(path) => read_file(path),
    }
}

fn read_file(path: &Path) -> Result<Message> {
    let bytes = fs::read(path).with_context(|| format!("read input file {}", path.display()))?;
    Ok(Message::new(bytes))
}

/// Hash a message, narrating padding and per-block state to the transcript.
pub(crate) fn sha256_message(message: &Message, transcript: &mut Transcript) -> Result<HashState> {
    let bytes = message.bytes().len();
    transcript.note(format!("input: {bytes} bytes ({} bits)", message.bit_len()));
    let padded = message.padded_bytes().context("pad message")?;
    let blocks = message.block_count().context("segment message")?;
    transcript.note(format!("padded: {} bytes in {blocks} block(s)", padded.len()));
    if transcript.enabled() {
        let bits = message.padded_bits().context("render padded message")?;
        transcript.block("padded message", &bits);
    }

    let state = digest_with(message, |index, state| {
        let words: Vec<String> = state.words().iter().map(|word| word.to_hex()).collect();
        transcript.note(format!("block {index}: {}", words.join(" ")));
    })
    .context("compress message")?;
    Ok(state)
}
