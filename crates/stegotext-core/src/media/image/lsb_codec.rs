use image::RgbImage;

use super::{ImageRgbColor, ImageRgbColorMut};
use crate::codec::{self, EmbedReport, Unveiled};
use crate::media::{Carrier, CodecOptions};
use crate::result::Result;

/// LSB codec for pixel matrices, one bit per color channel
impl Carrier for RgbImage {
    /// 3 bits per pixel
    fn capacity_bits(&self) -> usize {
        self.as_raw().len()
    }

    fn hide_text(&mut self, payload: &str, options: &CodecOptions) -> Result<EmbedReport> {
        let capacity = self.capacity_bits();
        codec::hide_text(ImageRgbColorMut::new(self), capacity, payload, options)
    }

    fn unveil(&self) -> Result<Unveiled> {
        codec::unveil(ImageRgbColor::new(self))
    }
}
