//! Message schedule expansion for a single 64-byte block.

use std::ops::Index;

use crate::error::{HashError, Result};
use crate::message::{Block, BLOCK_BYTES};
use crate::word::Word;

/// Number of words in a schedule (one per compression round).
pub const SCHEDULE_LEN: usize = 64;

/// The 64-word schedule derived from one block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule([Word; SCHEDULE_LEN]);

impl Schedule {
    /// Assemble a schedule from an existing word sequence.
    pub fn from_words(words: &[Word]) -> Result<Self> {
        let array: [Word; SCHEDULE_LEN] = words
            .try_into()
            .map_err(|_| HashError::ScheduleLength(words.len()))?;
        Ok(Self(array))
    }

    pub fn words(&self) -> &[Word; SCHEDULE_LEN] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.0.iter()
    }
}

impl Index<usize> for Schedule {
    type Output = Word;

    fn index(&self, index: usize) -> &Word {
        &self.0[index]
    }
}

/// Expand a block into its schedule.
///
/// The first 16 entries are the block's big-endian words; the rest follow
/// `W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]`.
pub fn expand(block: &Block) -> Schedule {
    let mut w = [Word::default(); SCHEDULE_LEN];
    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = Word::new(u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }
    for t in BLOCK_BYTES / 4..SCHEDULE_LEN {
        w[t] = w[t - 2].sigma1().add(&[w[t - 7], w[t - 15].sigma0(), w[t - 16]]);
    }
    Schedule(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_block() -> Block {
        let mut block = [0u8; BLOCK_BYTES];
        block[..3].copy_from_slice(b"abc");
        block[3] = 0x80;
        block[63] = 24;
        block
    }

    #[test]
    fn leading_words_copy_the_block() {
        let schedule = expand(&abc_block());
        assert_eq!(schedule[0], Word::new(0x6162_6380));
        for t in 1..15 {
            assert_eq!(schedule[t], Word::new(0));
        }
        assert_eq!(schedule[15], Word::new(0x18));
    }

    #[test]
    fn derived_words_match_published_trace() {
        // Known schedule words for the padded "abc" block.
        let schedule = expand(&abc_block());
        assert_eq!(schedule[16], Word::new(0x6162_6380));
        assert_eq!(schedule[17], Word::new(0x000f_0000));
        assert_eq!(schedule[18], Word::new(0x7da8_6405));
        assert_eq!(schedule[63], Word::new(0x12b1_edeb));
    }

    #[test]
    fn derived_words_follow_recurrence() {
        let schedule = expand(&abc_block());
        for t in 16..SCHEDULE_LEN {
            let expected = schedule[t - 2].sigma1()
                + schedule[t - 7]
                + schedule[t - 15].sigma0()
                + schedule[t - 16];
            assert_eq!(schedule[t], expected, "word {t}");
        }
    }

    #[test]
    fn rejects_malformed_length() {
        let words = vec![Word::new(1); 63];
        assert_eq!(
            Schedule::from_words(&words),
            Err(HashError::ScheduleLength(63))
        );
        let words = vec![Word::new(1); SCHEDULE_LEN];
        assert_eq!(Schedule::from_words(&words).unwrap().iter().count(), 64);
    }
}
