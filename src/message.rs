//! Message padding, block segmentation and the per-block schedule cache.
//!
//! Derived values are computed on first access and memoized for the lifetime
//! of the `Message`. The caches are `once_cell::sync::OnceCell`s, so a message
//! shared between threads still populates each entry exactly once.

use once_cell::sync::OnceCell;

use crate::error::{HashError, Result};
use crate::schedule::{self, Schedule};

/// Size of one block in bytes (512 bits).
pub const BLOCK_BYTES: usize = 64;
/// Width of the trailing length field in bytes.
const LENGTH_BYTES: usize = 8;
const BLOCK_BITS: u64 = (BLOCK_BYTES * 8) as u64;
const LENGTH_BITS: u64 = (LENGTH_BYTES * 8) as u64;

/// One 512-bit chunk of the padded message.
pub type Block = [u8; BLOCK_BYTES];

/// An input byte sequence plus its lazily derived forms.
#[derive(Debug, Default)]
pub struct Message {
    bytes: Vec<u8>,
    padded: OnceCell<Vec<u8>>,
    blocks: OnceCell<Vec<Block>>,
    schedules: OnceCell<Vec<OnceCell<Schedule>>>,
}

impl Message {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            ..Self::default()
        }
    }

    /// Build a message from text encoded as UTF-8.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.as_bytes())
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length of the original message in bits, modulo 2^64.
    pub fn bit_len(&self) -> u64 {
        (self.bytes.len() as u64).wrapping_mul(8)
    }

    /// Message followed by a single set bit, zero fill, and the 64-bit
    /// big-endian bit length.
    pub fn padded_bytes(&self) -> Result<&[u8]> {
        self.padded
            .get_or_try_init(|| pad(&self.bytes, self.bit_len()))
            .map(Vec::as_slice)
    }

    /// The padded message rendered as `0b` followed by every bit.
    pub fn padded_bits(&self) -> Result<String> {
        let padded = self.padded_bytes()?;
        let mut out = String::with_capacity(2 + padded.len() * 8);
        out.push_str("0b");
        for byte in padded {
            out.push_str(&format!("{byte:08b}"));
        }
        Ok(out)
    }

    /// The padded message split into ordered 64-byte blocks.
    pub fn blocks(&self) -> Result<&[Block]> {
        self.blocks
            .get_or_try_init(|| {
                let padded = self.padded_bytes()?;
                Ok(padded
                    .chunks_exact(BLOCK_BYTES)
                    .map(|chunk| {
                        let mut block = [0u8; BLOCK_BYTES];
                        block.copy_from_slice(chunk);
                        block
                    })
                    .collect())
            })
            .map(Vec::as_slice)
    }

    pub fn block_count(&self) -> Result<usize> {
        Ok(self.blocks()?.len())
    }

    /// Schedule for block `index`, expanded once and cached.
    pub fn schedule(&self, index: usize) -> Result<&Schedule> {
        let blocks = self.blocks()?;
        let block = blocks.get(index).ok_or(HashError::IndexOutOfRange {
            index,
            count: blocks.len(),
        })?;
        let slots = self
            .schedules
            .get_or_init(|| (0..blocks.len()).map(|_| OnceCell::new()).collect());
        Ok(slots[index].get_or_init(|| schedule::expand(block)))
    }
}

impl From<Vec<u8>> for Message {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for Message {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

/// Number of zero bits `K` after the set bit such that
/// `bit_len + 1 + K + 64` is a multiple of 512.
pub fn zero_fill_bits(bit_len: u64) -> u64 {
    let used = (bit_len % BLOCK_BITS + 1 + LENGTH_BITS) % BLOCK_BITS;
    (BLOCK_BITS - used) % BLOCK_BITS
}

/// Number of whole zero bytes following the `0x80` marker byte.
///
/// The marker byte carries the set bit plus 7 zero bits, so the remaining
/// fill must be a whole number of bytes.
pub fn zero_fill_bytes(bit_len: u64) -> Result<usize> {
    let zeros = zero_fill_bits(bit_len);
    if bit_len % 8 != 0 || zeros < 7 || (zeros - 7) % 8 != 0 {
        return Err(HashError::PaddingAlignment { bit_len });
    }
    Ok(((zeros - 7) / 8) as usize)
}

fn pad(bytes: &[u8], bit_len: u64) -> Result<Vec<u8>> {
    let fill = zero_fill_bytes(bit_len)?;
    let mut padded = Vec::with_capacity(bytes.len() + 1 + fill + LENGTH_BYTES);
    padded.extend_from_slice(bytes);
    padded.push(0x80);
    padded.resize(padded.len() + fill, 0);
    padded.extend_from_slice(&bit_len.to_be_bytes());
    if padded.len() % BLOCK_BYTES != 0 {
        return Err(HashError::PaddingAlignment { bit_len });
    }
    Ok(padded)
}
