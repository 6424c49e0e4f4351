//! Hides and unveils sentinel terminated text on any sequence of carrier primitives.

use log::{debug, warn};
use std::io::Read;

use crate::bits::BitString;
use crate::error::SteganoError;
use crate::media::{CapacityPolicy, CodecOptions, MediaPrimitive, MediaPrimitiveMut};
use crate::result::Result;
use crate::sentinel::{frame, SentinelScanner, SENTINEL};
use crate::universal_decoder::{OneBitUnveil, UniversalDecoder};
use crate::universal_encoder::{OneBitHide, UniversalEncoder};

const READ_CHUNK: usize = 64;

/// Outcome of hiding a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedReport {
    /// bits that made it into the carrier
    pub embedded_bits: usize,
    /// bits of the message including the sentinel
    pub required_bits: usize,
}

impl EmbedReport {
    /// true when the carrier was too small and the tail of the message was dropped
    pub fn is_truncated(&self) -> bool {
        self.embedded_bits < self.required_bits
    }
}

/// Outcome of unveiling a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unveiled {
    /// a terminated message was found, it might be empty
    Message(String),
    /// the carrier was exhausted without hitting the sentinel
    NotFound,
}

impl Unveiled {
    pub fn is_found(&self) -> bool {
        matches!(self, Unveiled::Message(_))
    }

    /// the message text, empty when nothing was found
    pub fn into_text(self) -> String {
        match self {
            Unveiled::Message(text) => text,
            Unveiled::NotFound => String::new(),
        }
    }
}

/// bits needed to hide the payload together with the sentinel
pub fn required_bits(payload: &str) -> usize {
    (payload.chars().count() + SENTINEL.len()) * 8
}

/// Fails with `CapacityExceeded` when the framed payload does not fit into `capacity_bits`.
pub fn check_capacity(payload: &str, capacity_bits: usize) -> Result<()> {
    let required = required_bits(payload);
    if required > capacity_bits {
        return Err(SteganoError::CapacityExceeded {
            required,
            available: capacity_bits,
        });
    }

    Ok(())
}

/// Frames the payload and hides it bit by bit in the carrier primitives, in iteration order.
///
/// With `CapacityPolicy::Truncate` a payload that does not fit is cut after the last
/// embeddable bit without an error, the report tells about it.
pub(crate) fn hide_text<'c, I>(
    carrier: I,
    capacity_bits: usize,
    payload: &str,
    options: &CodecOptions,
) -> Result<EmbedReport>
where
    I: Iterator<Item = MediaPrimitiveMut<'c>>,
{
    let bits = BitString::from_text(&frame(payload))?;
    debug!("The string after binary conversion: {bits}");
    debug!("Length of binary after conversion: {}", bits.len());

    if options.capacity_policy == CapacityPolicy::Reject {
        check_capacity(payload, capacity_bits)?;
    }

    let mut encoder = UniversalEncoder::new(carrier, OneBitHide);
    let report = EmbedReport {
        embedded_bits: encoder.hide_bits(bits.iter()),
        required_bits: bits.len(),
    };

    if report.is_truncated() {
        warn!(
            "carrier capacity of {capacity_bits} bits exceeded, only {} of {} bits were hidden",
            report.embedded_bits, report.required_bits
        );
    }

    Ok(report)
}

/// Reads the carrier byte by byte until the sentinel shows up or the carrier is exhausted.
pub(crate) fn unveil<I>(carrier: I) -> Result<Unveiled>
where
    I: Iterator<Item = MediaPrimitive>,
{
    let mut decoder = UniversalDecoder::new(carrier, OneBitUnveil);
    let mut scanner = SentinelScanner::new();
    let mut buf = [0u8; READ_CHUNK];

    loop {
        let n = decoder.read(&mut buf)?;
        if n == 0 {
            debug!(
                "no terminator found after scanning {} bytes",
                scanner.consumed()
            );
            return Ok(Unveiled::NotFound);
        }
        if let Some(message) = buf[..n].iter().find_map(|b| scanner.push(*b)) {
            debug!("terminator found after {} bytes", scanner.consumed());
            return Ok(Unveiled::Message(message));
        }
    }
}
