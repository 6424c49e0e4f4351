use super::{AudioPcmIter, AudioPcmIterMut, PcmBuffer};
use crate::codec::{self, EmbedReport, Unveiled};
use crate::media::{Carrier, CodecOptions};
use crate::result::Result;

/// LSB codec for PCM audio, one bit per sample byte
impl Carrier for PcmBuffer {
    fn capacity_bits(&self) -> usize {
        self.frames().len()
    }

    fn hide_text(&mut self, payload: &str, options: &CodecOptions) -> Result<EmbedReport> {
        let capacity = self.capacity_bits();
        codec::hide_text(
            AudioPcmIterMut::new(self.frames_mut()),
            capacity,
            payload,
            options,
        )
    }

    fn unveil(&self) -> Result<Unveiled> {
        codec::unveil(AudioPcmIter::new(self.frames()))
    }
}
