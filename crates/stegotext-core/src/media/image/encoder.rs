use image::{Rgb, RgbImage};

use crate::media::image::iterators::ColorIterMut;
use crate::media::MediaPrimitiveMut;

/// stegano target for image files, based on `RgbImage` by `image` crate
///
/// ## Example of usage
/// ```rust
/// use image::{Rgb, RgbImage};
/// use stegotext_core::media::image::encoder::ImageRgbColorMut;
/// use stegotext_core::universal_encoder::{OneBitHide, UniversalEncoder};
///
/// let mut image = RgbImage::from_pixel(2, 2, Rgb([10, 10, 10]));
/// {
///     let mut encoder = UniversalEncoder::new(ImageRgbColorMut::new(&mut image), OneBitHide);
///     encoder.hide_bits([true, true, true, false]);
/// }
/// assert_eq!(image.get_pixel(0, 0), &Rgb([11, 11, 11]));
/// assert_eq!(image.get_pixel(1, 0), &Rgb([10, 10, 10]));
/// ```
pub struct ImageRgbColorMut<'a> {
    remaining: usize,
    pixel: ColorIterMut<'a, Rgb<u8>>,
}

impl<'a> ImageRgbColorMut<'a> {
    /// constructor for a given `RgbImage` that lives somewhere
    pub fn new(input: &'a mut RgbImage) -> Self {
        Self {
            remaining: input.as_raw().len(),
            pixel: ColorIterMut::from_pixels_mut(input.pixels_mut()),
        }
    }
}

impl<'i> Iterator for ImageRgbColorMut<'i> {
    type Item = MediaPrimitiveMut<'i>;

    fn next(&mut self) -> Option<Self::Item> {
        let res = self.pixel.next().map(MediaPrimitiveMut::ImageColorChannel);
        self.remaining = self.remaining.saturating_sub(1);
        res
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
