//! The 64-round compression function and the running hash state.

use std::fmt;

use crate::constants::{initial_words, round_constant};
use crate::schedule::Schedule;
use crate::word::Word;

/// Size of the serialized digest in bytes.
pub const DIGEST_BYTES: usize = 32;

/// The eight-word running hash state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashState([Word; 8]);

impl HashState {
    /// State before the first block.
    pub fn initial() -> Self {
        Self(initial_words())
    }

    pub fn from_words(words: [Word; 8]) -> Self {
        Self(words)
    }

    pub fn words(&self) -> &[Word; 8] {
        &self.0
    }

    /// Big-endian serialization of the eight words.
    pub fn to_bytes(&self) -> [u8; DIGEST_BYTES] {
        let mut out = [0u8; DIGEST_BYTES];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// Lowercase hex with no prefix or separators.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for HashState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Run 64 rounds over `schedule` and fold the result into `state`.
pub fn compress(state: &HashState, schedule: &Schedule) -> HashState {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = state.0;

    for (i, &w) in schedule.iter().enumerate() {
        let t1 = e.usigma1().add(&[e.ch(f, g), h, round_constant(i), w]);
        let t2 = a.usigma0() + a.maj(b, c);
        h = g;
        g = f;
        f = e;
        e = d + t1;
        d = c;
        c = b;
        b = a;
        a = t1 + t2;
    }

    let worked = [a, b, c, d, e, f, g, h];
    let mut next = state.0;
    for (slot, value) in next.iter_mut().zip(worked) {
        *slot = *slot + value;
    }
    HashState(next)
}
