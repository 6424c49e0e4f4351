use bitstream_io::{BigEndian, BitWrite, BitWriter};
use std::io::{Cursor, Read, Result};

use crate::media::MediaPrimitive;

/// generic unveil algorithm, used for specific ones like LSB
pub trait UnveilAlgorithm {
    /// reads one hidden bit from a carrier primitive
    fn unveil(&self, carrier: MediaPrimitive) -> bool;
}

/// default 1 bit unveil strategy, reads the least significant bit
#[derive(Debug, Clone, Copy, Default)]
pub struct OneBitUnveil;

impl UnveilAlgorithm for OneBitUnveil {
    #[inline(always)]
    fn unveil(&self, carrier: MediaPrimitive) -> bool {
        carrier.lsb()
    }
}

/// generic stegano decoder
///
/// Bits are collected across primitive boundaries in carrier order and packed most significant
/// bit first. Bits that do not complete a byte at the end of the carrier are dropped.
pub struct UniversalDecoder<I, A> {
    input: I,
    algorithm: A,
}

impl<I, A> UniversalDecoder<I, A>
where
    I: Iterator<Item = MediaPrimitive>,
    A: UnveilAlgorithm,
{
    pub fn new(input: I, algorithm: A) -> Self {
        Self { input, algorithm }
    }
}

impl<I, A> Read for UniversalDecoder<I, A>
where
    I: Iterator<Item = MediaPrimitive>,
    A: UnveilAlgorithm,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        // 1 bit per primitive
        let items_to_take = buf.len() << 3;
        let mut bit_buffer = BitWriter::endian(Cursor::new(buf), BigEndian);

        let mut bit_read = 0;
        for carrier in self.input.by_ref().take(items_to_take) {
            bit_buffer.write_bit(self.algorithm.unveil(carrier))?;
            bit_read += 1;
        }

        Ok(bit_read >> 3)
    }
}
