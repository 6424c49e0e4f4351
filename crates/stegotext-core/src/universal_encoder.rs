use log::trace;

use crate::media::MediaPrimitiveMut;

/// generic hiding algorithm, used for specific ones like LSB
pub trait HideAlgorithm {
    /// hides one bit in a carrier primitive
    fn hide(&self, carrier: MediaPrimitiveMut<'_>, bit: bool);
}

/// default 1 bit hiding strategy, replaces the least significant bit
#[derive(Debug, Clone, Copy, Default)]
pub struct OneBitHide;

impl HideAlgorithm for OneBitHide {
    #[inline(always)]
    fn hide(&self, carrier: MediaPrimitiveMut<'_>, bit: bool) {
        match carrier {
            MediaPrimitiveMut::ImageColorChannel(b) | MediaPrimitiveMut::AudioSampleByte(b) => {
                *b = (*b & (u8::MAX - 1)) | u8::from(bit);
            }
        }
    }
}

/// generic stegano encoder, walks the carrier primitives in order and hides one bit in each
pub struct UniversalEncoder<I, A> {
    input: I,
    algorithm: A,
    bits_hidden: usize,
}

impl<'c, I, A> UniversalEncoder<I, A>
where
    I: Iterator<Item = MediaPrimitiveMut<'c>>,
    A: HideAlgorithm,
{
    pub fn new(input: I, algorithm: A) -> Self {
        Self {
            input,
            algorithm,
            bits_hidden: 0,
        }
    }

    /// Hides bits until either the bits or the carrier run out.
    ///
    /// Returns the number of bits hidden by this call, carrier primitives after the last
    /// hidden bit are not touched.
    pub fn hide_bits<B: IntoIterator<Item = bool>>(&mut self, bits: B) -> usize {
        let mut hidden = 0;
        for bit in bits {
            let Some(primitive) = self.input.next() else {
                trace!("carrier exhausted after {} bits", self.bits_hidden + hidden);
                break;
            };
            self.algorithm.hide(primitive, bit);
            hidden += 1;
        }
        self.bits_hidden += hidden;

        hidden
    }

    /// total number of bits hidden so far
    pub fn bits_hidden(&self) -> usize {
        self.bits_hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_only_replace_the_least_significant_bit() {
        let mut a = 0b1010_1010u8;
        let mut b = 0b1010_1011u8;
        OneBitHide.hide(MediaPrimitiveMut::ImageColorChannel(&mut a), true);
        OneBitHide.hide(MediaPrimitiveMut::AudioSampleByte(&mut b), false);

        assert_eq!(a, 0b1010_1011);
        assert_eq!(b, 0b1010_1010);
    }

    #[test]
    fn should_stop_when_the_carrier_is_exhausted() {
        let mut carrier = [0u8; 3];
        let mut encoder = UniversalEncoder::new(
            carrier.iter_mut().map(MediaPrimitiveMut::AudioSampleByte),
            OneBitHide,
        );

        assert_eq!(encoder.hide_bits([true, true, false, true, true]), 3);
        assert_eq!(encoder.bits_hidden(), 3);
        drop(encoder);

        assert_eq!(carrier, [1, 1, 0]);
    }

    #[test]
    fn should_leave_the_rest_of_the_carrier_untouched() {
        let mut carrier = [0xffu8; 4];
        {
            let mut encoder = UniversalEncoder::new(
                carrier.iter_mut().map(MediaPrimitiveMut::AudioSampleByte),
                OneBitHide,
            );
            encoder.hide_bits([false]);
            encoder.hide_bits([false]);
        }

        assert_eq!(carrier, [0xfe, 0xfe, 0xff, 0xff]);
    }
}
