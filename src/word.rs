//! 32-bit word arithmetic and the SHA-256 bit-mixing functions.
//!
//! `Word` is a plain copyable value. Every operation returns a new word and
//! addition always wraps modulo 2^32.

use std::fmt;
use std::ops::{Add, BitXor};

use crate::error::{HashError, Result};

/// Width of a word in bits.
pub const WORD_BITS: u32 = 32;

/// A 32-bit unsigned lane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Word(u32);

impl Word {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Build a word from exactly 4 big-endian bytes.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        let array: [u8; 4] = bytes
            .try_into()
            .map_err(|_| HashError::InvalidLength {
                actual: bytes.len(),
            })?;
        Ok(Self(u32::from_be_bytes(array)))
    }

    /// Build a word from an integer in `[0, 2^32)`.
    pub fn from_u64(value: u64) -> Result<Self> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| HashError::IntegerOutOfRange(value))
    }

    /// Parse a binary literal such as `0b0110 0001`; whitespace is ignored.
    pub fn from_bin(literal: &str) -> Result<Self> {
        let cleaned: String = literal.chars().filter(|c| !c.is_whitespace()).collect();
        let digits = cleaned.strip_prefix("0b").unwrap_or(&cleaned);
        if digits.is_empty() || !digits.chars().all(|c| c == '0' || c == '1') {
            return Err(HashError::InvalidBinary(literal.to_string()));
        }
        let significant = digits.trim_start_matches('0');
        if significant.len() > WORD_BITS as usize {
            return Err(HashError::InvalidBinary(literal.to_string()));
        }
        let value = u64::from_str_radix(digits, 2)
            .map_err(|_| HashError::InvalidBinary(literal.to_string()))?;
        Self::from_u64(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Sum of `self` and every operand, modulo 2^32.
    pub fn add(self, others: &[Word]) -> Word {
        let sum = others
            .iter()
            .fold(self.0, |acc, word| acc.wrapping_add(word.0));
        Word(sum)
    }

    /// Bitwise exclusive-or of `self` and every operand.
    pub fn xor(self, others: &[Word]) -> Word {
        Word(others.iter().fold(self.0, |acc, word| acc ^ word.0))
    }

    /// Logical right shift; `n` must be in `[0, 32]`.
    pub fn shr(self, n: u32) -> Result<Word> {
        check_shift(n)?;
        Ok(Word(shift_right(self.0, n)))
    }

    /// Circular right rotation; `n` must be in `[0, 32]`.
    pub fn rotr(self, n: u32) -> Result<Word> {
        check_shift(n)?;
        Ok(Word(self.0.rotate_right(n)))
    }

    /// `Ch(x, y, z) = (x & y) ^ (!x & z)` with `self` as `x`.
    pub fn ch(self, y: Word, z: Word) -> Word {
        Word((self.0 & y.0) ^ (!self.0 & z.0))
    }

    /// `Maj(x, y, z) = (x & y) ^ (x & z) ^ (y & z)` with `self` as `x`.
    pub fn maj(self, y: Word, z: Word) -> Word {
        Word((self.0 & y.0) ^ (self.0 & z.0) ^ (y.0 & z.0))
    }

    /// σ0(x) = ROTR7(x) ^ ROTR18(x) ^ SHR3(x)
    pub fn sigma0(self) -> Word {
        let x = self.0;
        Word(x.rotate_right(7) ^ x.rotate_right(18) ^ shift_right(x, 3))
    }

    /// σ1(x) = ROTR17(x) ^ ROTR19(x) ^ SHR10(x)
    pub fn sigma1(self) -> Word {
        let x = self.0;
        Word(x.rotate_right(17) ^ x.rotate_right(19) ^ shift_right(x, 10))
    }

    /// Σ0(x) = ROTR2(x) ^ ROTR13(x) ^ ROTR22(x)
    pub fn usigma0(self) -> Word {
        let x = self.0;
        Word(x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22))
    }

    /// Σ1(x) = ROTR6(x) ^ ROTR11(x) ^ ROTR25(x)
    pub fn usigma1(self) -> Word {
        let x = self.0;
        Word(x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25))
    }

    /// `0x` followed by 8 lowercase hex digits.
    pub fn to_hex(self) -> String {
        format!("0x{:08x}", self.0)
    }

    /// `0b` followed by 32 binary digits.
    pub fn to_bin(self) -> String {
        format!("0b{:032b}", self.0)
    }
}

fn check_shift(n: u32) -> Result<()> {
    if n > WORD_BITS {
        return Err(HashError::ShiftOutOfRange(n));
    }
    Ok(())
}

// `u32 >> 32` overflows, so a full-width shift is handled explicitly.
fn shift_right(x: u32, n: u32) -> u32 {
    x.checked_shr(n).unwrap_or(0)
}

impl From<u32> for Word {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Word> for u32 {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl Add for Word {
    type Output = Word;

    fn add(self, rhs: Word) -> Word {
        Word(self.0.wrapping_add(rhs.0))
    }
}

impl BitXor for Word {
    type Output = Word;

    fn bitxor(self, rhs: Word) -> Word {
        Word(self.0 ^ rhs.0)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::LowerHex for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn addition_wraps_at_word_width() {
        let max = Word::new(0xffff_ffff);
        assert_eq!(max + Word::new(1), Word::new(0));
        assert_eq!(max.add(&[Word::new(1), Word::new(5)]), Word::new(5));
    }

    #[test]
    fn add_without_operands_is_identity() {
        let word = Word::new(0x1234_5678);
        assert_eq!(word.add(&[]), word);
        assert_eq!(word.xor(&[]), word);
    }

    #[test]
    fn builds_from_big_endian_bytes() {
        let word = Word::from_be_bytes(&[0x61, 0x62, 0x63, 0x80]).expect("4 bytes");
        assert_eq!(word.value(), 0x6162_6380);
    }

    #[test]
    fn rejects_wrong_byte_length() {
        let err = Word::from_be_bytes(&[1, 2, 3]).unwrap_err();
        assert_eq!(err, HashError::InvalidLength { actual: 3 });
        assert!(Word::from_be_bytes(&[0; 5]).is_err());
    }

    #[test]
    fn rejects_integer_out_of_range() {
        assert_eq!(Word::from_u64(0xffff_ffff).unwrap().value(), u32::MAX);
        let err = Word::from_u64(1 << 32).unwrap_err();
        assert_eq!(err, HashError::IntegerOutOfRange(1 << 32));
    }

    #[test]
    fn parses_binary_literals() {
        assert_eq!(Word::from_bin("0110 0001").unwrap(), Word::new(0x61));
        assert_eq!(Word::from_bin("0b1\t0\n1").unwrap(), Word::new(5));
        let full = "1".repeat(32);
        assert_eq!(Word::from_bin(&full).unwrap(), Word::new(u32::MAX));
        let padded = format!("0000{full}");
        assert_eq!(Word::from_bin(&padded).unwrap(), Word::new(u32::MAX));
    }

    #[test]
    fn rejects_bad_binary_literals() {
        assert!(Word::from_bin("").is_err());
        assert!(Word::from_bin("0b").is_err());
        assert!(Word::from_bin("0102").is_err());
        assert!(Word::from_bin("+101").is_err());
        assert!(Word::from_bin(&format!("1{}", "0".repeat(32))).is_err());
    }

    #[test]
    fn shifts_cover_full_range() {
        let word = Word::new(0x8000_0001);
        assert_eq!(word.shr(0).unwrap(), word);
        assert_eq!(word.shr(31).unwrap(), Word::new(1));
        assert_eq!(word.shr(32).unwrap(), Word::new(0));
        assert_eq!(word.rotr(1).unwrap(), Word::new(0xc000_0000));
        assert_eq!(word.rotr(32).unwrap(), word);
        assert_eq!(word.shr(33), Err(HashError::ShiftOutOfRange(33)));
        assert_eq!(word.rotr(40), Err(HashError::ShiftOutOfRange(40)));
    }

    #[test]
    fn choose_and_majority() {
        let x = Word::new(0xff00_ff00);
        let y = Word::new(0x0f0f_0f0f);
        let z = Word::new(0xf0f0_f0f0);
        assert_eq!(x.ch(y, z), Word::new(0x0ff0_0ff0));
        assert_eq!(x.maj(y, z), Word::new(0xff00_ff00));
        assert_eq!(y.maj(y, z), y);
    }

    #[test]
    fn mixing_functions_match_definitions() {
        let x = Word::new(0x6a09_e667);
        let expect = |a: u32, b: u32, c: Word| {
            x.rotr(a).unwrap().xor(&[x.rotr(b).unwrap(), c])
        };
        assert_eq!(x.sigma0(), expect(7, 18, x.shr(3).unwrap()));
        assert_eq!(x.sigma1(), expect(17, 19, x.shr(10).unwrap()));
        assert_eq!(x.usigma0(), expect(2, 13, x.rotr(22).unwrap()));
        assert_eq!(x.usigma1(), expect(6, 11, x.rotr(25).unwrap()));
    }

    #[test]
    fn renders_hex_and_binary() {
        let word = Word::new(0x61);
        assert_eq!(word.to_hex(), "0x00000061");
        assert_eq!(word.to_string(), "0x00000061");
        assert_eq!(word.to_bin(), format!("0b{}01100001", "0".repeat(24)));
        assert_eq!(format!("{word:08x}"), "00000061");
    }

    proptest! {
        #[test]
        fn addition_commutes(a in any::<u32>(), b in any::<u32>()) {
            prop_assert_eq!(Word::new(a) + Word::new(b), Word::new(b) + Word::new(a));
        }

        #[test]
        fn rotr_zero_is_identity(x in any::<u32>()) {
            prop_assert_eq!(Word::new(x).rotr(0).unwrap(), Word::new(x));
        }

        #[test]
        fn rotr_is_invertible(x in any::<u32>(), n in 0u32..=32) {
            let rotated = Word::new(x).rotr(n).unwrap();
            let back = rotated.rotr((32 - n) % 32).unwrap();
            prop_assert_eq!(back, Word::new(x));
        }

        #[test]
        fn binary_rendering_parses_back(x in any::<u32>()) {
            let word = Word::new(x);
            prop_assert_eq!(Word::from_bin(&word.to_bin()).unwrap(), word);
        }
    }
}
