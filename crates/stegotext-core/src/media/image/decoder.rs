use image::{Rgb, RgbImage};

use crate::media::image::iterators::ColorIter;
use crate::media::MediaPrimitive;

/// stegano source for image files, based on `RgbImage` by `image` crate
///
/// ## Example of usage
/// ```rust
/// use std::io::Read;
/// use image::{Rgb, RgbImage};
/// use stegotext_core::media::image::decoder::ImageRgbColor;
/// use stegotext_core::universal_decoder::{OneBitUnveil, UniversalDecoder};
///
/// // 'A' = 0100_0001 spread over the first 8 color channels
/// let image = RgbImage::from_fn(3, 1, |x, _| match x {
///     0 => Rgb([0, 1, 0]),
///     1 => Rgb([0, 0, 0]),
///     _ => Rgb([0, 1, 0]),
/// });
/// let mut secret = [0; 1];
///
/// UniversalDecoder::new(ImageRgbColor::new(&image), OneBitUnveil)
///     .read_exact(&mut secret)
///     .expect("Cannot read 1 byte from decoder");
///
/// assert_eq!(&secret, b"A");
/// ```
pub struct ImageRgbColor<'i> {
    remaining: usize,
    pixel: ColorIter<'i, Rgb<u8>>,
}

impl<'i> ImageRgbColor<'i> {
    /// constructor for a given `RgbImage` that lives somewhere
    pub fn new(input: &'i RgbImage) -> Self {
        Self {
            remaining: input.as_raw().len(),
            pixel: ColorIter::from_pixels(input.pixels()),
        }
    }
}

/// iterates over the image and returns single color channels of each pixel wrapped into a `MediaPrimitive`
impl Iterator for ImageRgbColor<'_> {
    type Item = MediaPrimitive;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let res = self
            .pixel
            .next()
            .map(|c| MediaPrimitive::ImageColorChannel(*c));
        self.remaining = self.remaining.saturating_sub(1);
        res
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

#[cfg(test)]
mod decoder_tests {
    use super::*;
    use crate::test_utils::prepare_5x5_image;

    #[test]
    fn it_should_iterate_over_all_colors_of_an_image() {
        let img = prepare_5x5_image();
        let (width, height) = img.dimensions();
        let mut media_primitive_iter = ImageRgbColor::new(&img);

        for y in 0..height {
            for x in 0..width {
                let expected_pixel = img.get_pixel(x, y);
                for color_idx in 0..3 {
                    let expected_color = expected_pixel.0[color_idx];
                    let given_color = media_primitive_iter.next().unwrap_or_else(|| {
                        panic!("MediaPrimitive at ({x}, {y}) was not even existing!")
                    });

                    assert_eq!(
                        given_color,
                        MediaPrimitive::ImageColorChannel(expected_color),
                        "MediaPrimitive at ({x}, {y}) does not match"
                    );
                }
            }
        }
        // ensure iterator is exhausted
        assert!(media_primitive_iter.next().is_none());
    }
}
