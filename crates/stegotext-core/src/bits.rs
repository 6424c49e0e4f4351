//! Binary digit strings, the canonical bit representation of a payload.
//!
//! Every value is rendered as 8 binary digits per byte, most significant bit first,
//! so `'H'` becomes `01001000`.

use std::fmt;
use std::str::FromStr;

use crate::error::SteganoError;
use crate::result::Result;

/// The typed inputs that have a binary digit representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitInput<'a> {
    /// one byte per character, all characters concatenated
    Text(&'a str),
    /// one 8 bit string per byte, e.g. the color channels of a pixel
    ByteSequence(&'a [u8]),
    SingleByte(u8),
    /// accepted as long as it fits into a byte
    Integer(i64),
}

impl BitInput<'_> {
    /// Converts the input into its binary digit strings.
    ///
    /// `Text` yields exactly one concatenated string, `ByteSequence` one string per byte
    /// and `SingleByte` / `Integer` one string.
    pub fn to_binary(self) -> Result<Vec<BitString>> {
        match self {
            BitInput::Text(text) => Ok(vec![BitString::from_text(text)?]),
            BitInput::ByteSequence(bytes) => Ok(BitString::from_byte_sequence(bytes)),
            BitInput::SingleByte(byte) => Ok(vec![BitString::from_byte(byte)]),
            BitInput::Integer(value) => Ok(vec![BitString::from_integer(value)?]),
        }
    }
}

impl<'a> From<&'a str> for BitInput<'a> {
    fn from(text: &'a str) -> Self {
        BitInput::Text(text)
    }
}

impl<'a> From<&'a [u8]> for BitInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        BitInput::ByteSequence(bytes)
    }
}

impl From<u8> for BitInput<'_> {
    fn from(byte: u8) -> Self {
        BitInput::SingleByte(byte)
    }
}

/// An ordered sequence of bits, displayed as `'0'` / `'1'` digits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Each character is treated as one byte, characters above U+00FF are rejected
    pub fn from_text(text: &str) -> Result<Self> {
        let mut s = Self {
            bits: Vec::with_capacity(text.len() * 8),
        };
        for (position, c) in text.chars().enumerate() {
            let byte = u8::try_from(u32::from(c)).map_err(|_| {
                SteganoError::UnsupportedInputType(format!(
                    "character {c:?} (U+{:04X}) at position {position} does not fit into one byte",
                    u32::from(c)
                ))
            })?;
            s.push_byte(byte);
        }

        Ok(s)
    }

    pub fn from_byte_sequence(bytes: &[u8]) -> Vec<Self> {
        bytes.iter().copied().map(Self::from_byte).collect()
    }

    pub fn from_byte(byte: u8) -> Self {
        let mut s = Self {
            bits: Vec::with_capacity(8),
        };
        s.push_byte(byte);
        s
    }

    pub fn from_integer(value: i64) -> Result<Self> {
        u8::try_from(value).map(Self::from_byte).map_err(|_| {
            SteganoError::UnsupportedInputType(format!(
                "integer {value} is outside of the byte range 0..=255"
            ))
        })
    }

    fn push_byte(&mut self, byte: u8) {
        self.bits.extend((0..8).rev().map(|i| (byte >> i) & 1 == 1));
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// packs the bits back into bytes, a trailing group of less than 8 bits is dropped
    pub fn bytes(&self) -> Vec<u8> {
        self.bits
            .chunks_exact(8)
            .map(|chunk| chunk.iter().fold(0u8, |acc, bit| (acc << 1) | u8::from(*bit)))
            .collect()
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = SteganoError;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(SteganoError::UnsupportedInputType(format!(
                    "binary digit expected, found {other:?}"
                ))),
            })
            .collect()
    }
}
