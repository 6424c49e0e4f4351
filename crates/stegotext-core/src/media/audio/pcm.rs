use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::{debug, error};
use std::io::{Read, Seek, Write};
use std::path::Path;

use crate::error::SteganoError;
use crate::result::Result;

/// The WAV parameters that have to survive hiding unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioParams {
    pub channels: u16,
    /// bytes per sample, 1 to 4
    pub sample_width: u16,
    pub frame_rate: u32,
    pub frame_count: u32,
}

impl AudioParams {
    /// bytes of one frame, all channels together
    pub fn frame_width(&self) -> usize {
        usize::from(self.channels) * usize::from(self.sample_width)
    }

    /// Only integer PCM with 1 to 4 bytes per sample and at least one channel can be written.
    pub fn validate(&self) -> Result<()> {
        if !(1..=4).contains(&self.sample_width) {
            error!("Unsupported sample width of {} bytes", self.sample_width);
            return Err(SteganoError::InvalidAudioMedia);
        }
        if self.channels == 0 {
            error!("Audio without channels is not supported");
            return Err(SteganoError::InvalidAudioMedia);
        }

        Ok(())
    }

    /// the `hound` spec to write a WAV container with
    pub fn spec(&self) -> WavSpec {
        WavSpec {
            channels: self.channels,
            sample_rate: self.frame_rate,
            bits_per_sample: self.sample_width.saturating_mul(8),
            sample_format: SampleFormat::Int,
        }
    }
}

/// Raw PCM sample bytes, laid out as in a WAV file: little endian, frames interleaved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmBuffer {
    params: AudioParams,
    frames: Vec<u8>,
}

impl PcmBuffer {
    /// Fails with `InvalidAudioMedia` when `params` cannot be written as WAV or `frames`
    /// does not hold whole frames.
    pub fn new(params: AudioParams, frames: Vec<u8>) -> Result<Self> {
        params.validate()?;
        if frames.len() % params.frame_width() != 0 {
            error!(
                "{} PCM bytes do not split into frames of {} bytes",
                frames.len(),
                params.frame_width()
            );
            return Err(SteganoError::InvalidAudioMedia);
        }

        Ok(Self { params, frames })
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        let reader = WavReader::open(f).map_err(|e| {
            error!("Error opening audio file {f:?}: {e}");
            SteganoError::InvalidAudioMedia
        })?;

        Self::from_wav_reader(reader)
    }

    /// Reads integer PCM with 8, 16, 24 or 32 bits per sample.
    pub fn from_wav_reader<R: Read>(mut reader: WavReader<R>) -> Result<Self> {
        let spec = reader.spec();
        if spec.sample_format != SampleFormat::Int {
            error!("Only integer PCM audio is supported, got {:?}", spec.sample_format);
            return Err(SteganoError::InvalidAudioMedia);
        }
        let sample_width = match spec.bits_per_sample {
            8 => 1,
            16 => 2,
            24 => 3,
            32 => 4,
            other => {
                error!("Unsupported sample width of {other} bits");
                return Err(SteganoError::InvalidAudioMedia);
            }
        };
        let params = AudioParams {
            channels: spec.channels,
            sample_width,
            frame_rate: spec.sample_rate,
            frame_count: reader.duration(),
        };

        let mut frames = Vec::with_capacity(reader.len() as usize * sample_width as usize);
        for sample in reader.samples::<i32>() {
            let sample = sample.map_err(|e| {
                error!("Error reading audio sample: {e}");
                SteganoError::InvalidAudioMedia
            })?;
            match sample_width {
                // 8 bit WAV is stored unsigned
                1 => frames.push((sample + 128) as u8),
                2 => frames.write_i16::<LittleEndian>(sample as i16)?,
                3 => frames.write_i24::<LittleEndian>(sample)?,
                _ => frames.write_i32::<LittleEndian>(sample)?,
            }
        }
        debug!("read {} PCM bytes with {params:?}", frames.len());

        Ok(Self { params, frames })
    }

    pub fn params(&self) -> &AudioParams {
        &self.params
    }

    pub fn frames(&self) -> &[u8] {
        &self.frames
    }

    /// the buffer size is fixed, only the bytes can change
    pub fn frames_mut(&mut self) -> &mut [u8] {
        &mut self.frames
    }

    pub fn into_parts(self) -> (AudioParams, Vec<u8>) {
        (self.params, self.frames)
    }

    /// Writes a WAV container with the unchanged parameters and the current bytes.
    pub fn write_wav<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut wav_writer = WavWriter::new(writer, self.params.spec()).map_err(|e| {
            error!("Error creating audio: {e}");
            SteganoError::AudioCreationError
        })?;

        let width = usize::from(self.params.sample_width);
        for chunk in self.frames.chunks_exact(width) {
            let sample = match width {
                1 => i32::from(chunk[0]) - 128,
                2 => i32::from(LittleEndian::read_i16(chunk)),
                3 => LittleEndian::read_i24(chunk),
                _ => LittleEndian::read_i32(chunk),
            };
            wav_writer.write_sample(sample).map_err(|e| {
                error!("Error writing audio sample: {e}");
                SteganoError::AudioEncodingError
            })?;
        }
        wav_writer.finalize().map_err(|e| {
            error!("Error finalizing audio: {e}");
            SteganoError::AudioEncodingError
        })?;

        Ok(())
    }
}
