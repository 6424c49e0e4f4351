use std::path::Path;

use crate::codec::{self, EmbedReport};
use crate::media::{Carrier, CodecOptions, Media};
use crate::sentinel::SENTINEL;
use crate::SteganoError;

pub fn hide(
    media: &Path,
    write_to_file: &Path,
    message: &str,
    options: CodecOptions,
) -> Result<EmbedReport, SteganoError> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_media(media)
        .with_output(write_to_file)
        .with_message(message)
        .execute()
}

pub fn unveil(secret_media: &Path) -> Result<String, SteganoError> {
    crate::api::unveil::prepare()
        .from_secret_file(secret_media)
        .execute()
}

/// How much text a carrier can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub bits: usize,
}

impl Capacity {
    /// characters that fit next to the sentinel
    pub fn max_characters(&self) -> usize {
        (self.bits / 8).saturating_sub(SENTINEL.len())
    }

    /// Fails with `CapacityExceeded` when `message` would be truncated.
    pub fn check(&self, message: &str) -> Result<(), SteganoError> {
        codec::check_capacity(message, self.bits)
    }
}

pub fn capacity(media: &Path) -> Result<Capacity, SteganoError> {
    Ok(Capacity {
        bits: Media::from_file(media)?.capacity_bits(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_count_characters_next_to_the_sentinel() {
        assert_eq!(Capacity { bits: 60 }.max_characters(), 2);
        assert_eq!(Capacity { bits: 39 }.max_characters(), 0);
        assert!(Capacity { bits: 56 }.check("Hi").is_ok());
        assert!(Capacity { bits: 55 }.check("Hi").is_err());
    }
}
