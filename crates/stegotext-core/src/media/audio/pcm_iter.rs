use std::slice::{Iter, IterMut};

use crate::media::{MediaPrimitive, MediaPrimitiveMut};

/// Iterating the sample bytes of a PCM buffer in ascending order
pub struct AudioPcmIter<'a> {
    bytes: Iter<'a, u8>,
}

impl<'a> AudioPcmIter<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes: bytes.iter(),
        }
    }
}

/// PCM byte iterator that yields immutable MediaPrimitives `MediaPrimitive`
impl Iterator for AudioPcmIter<'_> {
    type Item = MediaPrimitive;

    fn next(&mut self) -> Option<Self::Item> {
        self.bytes.next().copied().map(MediaPrimitive::AudioSampleByte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.bytes.size_hint()
    }
}

/// Iterating the mutable sample bytes of a PCM buffer in ascending order
pub struct AudioPcmIterMut<'a> {
    bytes: IterMut<'a, u8>,
}

impl<'a> AudioPcmIterMut<'a> {
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self {
            bytes: bytes.iter_mut(),
        }
    }
}

/// PCM byte iterator that yields mutable MediaPrimitives `MediaPrimitiveMut`
impl<'a> Iterator for AudioPcmIterMut<'a> {
    type Item = MediaPrimitiveMut<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.bytes.next().map(MediaPrimitiveMut::AudioSampleByte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.bytes.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;
    use crate::universal_decoder::{OneBitUnveil, UniversalDecoder};
    use crate::universal_encoder::{OneBitHide, UniversalEncoder};

    #[test]
    fn test_pcm_iter_with_decoder() {
        // LSBs of "Hi" = 0100_1000 0110_1001
        let frames: Vec<u8> = "0100100001101001"
            .chars()
            .map(|c| if c == '1' { 0x81 } else { 0x80 })
            .collect();
        let mut secret = vec![0; 2];

        UniversalDecoder::new(AudioPcmIter::new(&frames), OneBitUnveil)
            .read_exact(&mut secret)
            .expect("Cannot read 2 bytes from decoder");

        assert_eq!(secret, b"Hi");
    }

    #[test]
    fn test_pcm_iter_mut_with_encoder() {
        let mut frames = vec![0x80u8; 16];
        {
            let mut encoder =
                UniversalEncoder::new(AudioPcmIterMut::new(&mut frames), OneBitHide);
            assert_eq!(encoder.hide_bits([true, false, true]), 3);
        }

        assert_eq!(&frames[..4], &[0x81, 0x80, 0x81, 0x80]);
        assert!(frames[3..].iter().all(|b| *b == 0x80));
    }

    #[test]
    fn test_pcm_iter_visits_every_byte_once() {
        let frames = [1u8, 2, 3, 4, 5];
        let visited: Vec<MediaPrimitive> = AudioPcmIter::new(&frames).collect();

        assert_eq!(AudioPcmIter::new(&frames).size_hint(), (5, Some(5)));
        assert_eq!(
            visited,
            frames
                .iter()
                .copied()
                .map(MediaPrimitive::AudioSampleByte)
                .collect::<Vec<_>>()
        );
    }
}
