use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use enum_dispatch::enum_dispatch;
pub use image::RgbImage;
use image::ImageFormat;
use log::{error, warn};

use super::audio::PcmBuffer;
use super::{CodecOptions, Persist};
use crate::codec::{EmbedReport, Unveiled};
use crate::error::SteganoError;
use crate::result::Result;

/// A carrier that can hide one text message in the least significant bits of its bytes
#[enum_dispatch]
pub trait Carrier {
    /// number of bits the carrier can take, one per color channel or sample byte
    fn capacity_bits(&self) -> usize;

    /// Frames `payload` with the sentinel and hides it from the first carrier byte on.
    ///
    /// The carrier is changed in place and keeps its size.
    fn hide_text(&mut self, payload: &str, options: &CodecOptions) -> Result<EmbedReport>;

    fn unveil(&self) -> Result<Unveiled>;

    /// like `unveil` but an empty string when no terminated message was found
    fn unveil_text(&self) -> Result<String> {
        Ok(self.unveil()?.into_text())
    }
}

/// a media container for steganography
#[enum_dispatch(Carrier)]
#[derive(Debug)]
pub enum Media {
    Image(RgbImage),
    Audio(PcmBuffer),
}

impl Media {
    pub fn from_image(img: RgbImage) -> Self {
        Self::Image(img)
    }

    pub fn from_audio(audio: PcmBuffer) -> Self {
        Self::Audio(audio)
    }

    /// Opens a WAV file as audio, PNG, JPEG and TIFF files as image.
    ///
    /// Images are converted to 8 bit RGB, an alpha channel is dropped. Compressed audio
    /// like MP3 has to be converted to WAV beforehand.
    pub fn from_file(f: &Path) -> Result<Self> {
        let Some(ext) = f.extension().and_then(|e| e.to_str()) else {
            error!("{f:?} has no file extension to tell its media type");
            return Err(SteganoError::UnsupportedMedia);
        };
        let ext = ext.to_lowercase();

        match ext.as_str() {
            "wav" => return Ok(Self::Audio(PcmBuffer::from_file(f)?)),
            "mp3" | "ogg" | "flac" | "aac" | "m4a" => {
                error!("{ext} audio is not supported, convert {f:?} to WAV first");
                return Err(SteganoError::UnsupportedMedia);
            }
            _ => {}
        }
        if ImageFormat::from_extension(&ext).is_none() {
            error!("{ext} is neither a supported image nor audio format");
            return Err(SteganoError::UnsupportedMedia);
        }

        let img = image::open(f).map_err(|e| {
            error!("Error opening image {f:?}: {e}");
            SteganoError::InvalidImageMedia
        })?;
        if img.color().has_alpha() {
            warn!("{f:?} has an alpha channel, it will be dropped");
        }

        Ok(Self::Image(img.to_rgb8()))
    }

    /// Images are always written as PNG, lossy formats would destroy the hidden bits.
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        match self {
            Media::Image(i) => i.write_to(&mut writer, ImageFormat::Png).map_err(|e| {
                error!("Error saving image: {e}");
                SteganoError::ImageEncodingError
            }),
            Media::Audio(audio) => audio.write_wav(writer),
        }
    }
}

impl Persist for Media {
    fn save_as(&self, file: &Path) -> Result<()> {
        if let Media::Image(_) = self {
            let is_png = file
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("png"));
            if !is_png {
                warn!("{file:?} will contain PNG data regardless of its extension");
            }
        }

        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })?;
        self.save_to_writer(f)
    }
}
