//! JSON report emitted with `--json`.

use anyhow::{Context, Result};
use scratch_sha256::{HashState, Message};
use serde::Serialize;

/// Algorithm label recorded in every report.
pub(crate) const ALGORITHM: &str = "sha256";

/// Summary of one hashing run.
#[derive(Serialize, Debug)]
pub(crate) struct Report {
    pub(crate) algorithm: &'static str,
    pub(crate) input_bytes: u64,
    pub(crate) padded_bytes: u64,
    pub(crate) blocks: u64,
    pub(crate) digest: String,
}

impl Report {
    pub(crate) fn new(message: &Message, state: &HashState) -> Result<Self> {
        let padded = message.padded_bytes().context("pad message for report")?;
        let blocks = message.block_count().context("count blocks for report")?;
        Ok(Self {
            algorithm: ALGORITHM,
            input_bytes: message.bytes().len() as u64,
            padded_bytes: padded.len() as u64,
            blocks: blocks as u64,
            digest: state.to_hex(),
        })
    }

    pub(crate) fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize report")
    }
}
