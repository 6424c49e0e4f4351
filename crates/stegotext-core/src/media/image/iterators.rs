use image::buffer::{Pixels, PixelsMut};
use image::Pixel;
use std::slice::{Iter, IterMut};

/// Mutable access to all color channels, row by row, left to right, channel by channel.
pub(crate) struct ColorIterMut<'a, P: Pixel + 'a> {
    pixels: PixelsMut<'a, P>,
    colors: Option<IterMut<'a, P::Subpixel>>,
}

impl<'a, P: Pixel + 'a> ColorIterMut<'a, P> {
    pub fn from_pixels_mut(pixels: PixelsMut<'a, P>) -> Self {
        Self {
            pixels,
            colors: None,
        }
    }
}

impl<'a, P: Pixel + 'a> Iterator for ColorIterMut<'a, P> {
    type Item = &'a mut P::Subpixel;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(color) = self.colors.as_mut().and_then(Iterator::next) {
                return Some(color);
            }
            let pixel = self.pixels.next()?;
            self.colors = Some(pixel.channels_mut().iter_mut());
        }
    }
}

/// Readonly access to all color channels, in the same order as `ColorIterMut`
pub(crate) struct ColorIter<'a, P: Pixel + 'a> {
    pixels: Pixels<'a, P>,
    colors: Option<Iter<'a, P::Subpixel>>,
}

impl<'a, P: Pixel + 'a> ColorIter<'a, P> {
    pub fn from_pixels(pixels: Pixels<'a, P>) -> Self {
        Self {
            pixels,
            colors: None,
        }
    }
}

impl<'a, P: Pixel + 'a> Iterator for ColorIter<'a, P> {
    type Item = &'a P::Subpixel;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(color) = self.colors.as_mut().and_then(Iterator::next) {
                return Some(color);
            }
            let pixel = self.pixels.next()?;
            self.colors = Some(pixel.channels().iter());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    use crate::test_utils::prepare_4x6_linear_growing_colors;

    #[test]
    fn should_walk_rows_first_then_channels() {
        let mut img = prepare_4x6_linear_growing_colors();
        let (width, height) = img.dimensions();
        let mut color_iter = ColorIter::from_pixels(img.pixels());

        for y in 0..height {
            for x in 0..width {
                let expected_pixel = img.get_pixel(x, y);
                for color_idx in 0..3 {
                    let given_color = color_iter
                        .next()
                        .unwrap_or_else(|| panic!("Color at ({x}, {y}) was not even existing!"));

                    assert_eq!(
                        given_color, &expected_pixel.0[color_idx],
                        "Color at ({x}, {y}) does not match"
                    );
                }
            }
        }
        // ensure iterator is exhausted
        assert!(color_iter.next().is_none());

        // now the mut iterator
        let color_iter = ColorIterMut::from_pixels_mut(img.pixels_mut());
        for (i, c) in color_iter.enumerate() {
            let i: u8 = i as u8;
            assert_eq!(c, &i, "the ({i}+1)-th color was wrong");
        }
    }

    #[test]
    fn should_allow_to_mutate_colors() {
        let mut img = prepare_4x6_linear_growing_colors();
        for c in ColorIterMut::from_pixels_mut(img.pixels_mut()) {
            *c = 7;
        }

        assert!(img.pixels().all(|p| p.0 == [7, 7, 7]));
    }

    #[test]
    fn should_yield_nothing_for_an_empty_image() {
        let mut img = RgbImage::new(0, 0);

        assert_eq!(ColorIter::from_pixels(img.pixels()).count(), 0);
        assert_eq!(ColorIterMut::from_pixels_mut(img.pixels_mut()).count(), 0);
    }
}
