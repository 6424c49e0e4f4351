pub mod lsb_codec;
pub mod pcm;
pub mod pcm_iter;

pub use pcm::{AudioParams, PcmBuffer};
pub use pcm_iter::{AudioPcmIter, AudioPcmIterMut};
