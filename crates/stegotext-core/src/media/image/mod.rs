pub mod decoder;
pub mod encoder;
mod iterators;
pub mod lsb_codec;

pub use decoder::ImageRgbColor;
pub use encoder::ImageRgbColorMut;
