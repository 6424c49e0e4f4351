/// wrap the low level data types that carries information
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum MediaPrimitive {
    ImageColorChannel(u8),
    AudioSampleByte(u8),
}

impl MediaPrimitive {
    /// the least significant bit of the wrapped byte
    pub fn lsb(&self) -> bool {
        match self {
            MediaPrimitive::ImageColorChannel(b) | MediaPrimitive::AudioSampleByte(b) => b & 1 == 1,
        }
    }
}

/// mutable primitive for storing stegano data
#[derive(Debug, Eq, PartialEq)]
pub enum MediaPrimitiveMut<'a> {
    ImageColorChannel(&'a mut u8),
    AudioSampleByte(&'a mut u8),
}
