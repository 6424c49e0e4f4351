//! # Stegotext Core API
//!
//! Hides a text message in the least significant bits of a carrier and unveils it again.
//! Carriers are RGB images (one bit per color channel, row by row) and PCM audio
//! (one bit per sample byte). The message end is marked by the sentinel `*^*^*`.
//!
//! Every character of a message is hidden as one byte, so only characters up to U+00FF
//! are accepted.
//!
//! # Usage Examples
//!
//! ## Hide and unveil a message in a pixel matrix
//!
//! ```rust
//! use image::RgbImage;
//! use stegotext_core::{Carrier, CodecOptions};
//!
//! let mut image = RgbImage::new(5, 4);
//! let report = image
//!     .hide_text("Hi", &CodecOptions::default())
//!     .expect("Failed to hide message");
//!
//! assert!(!report.is_truncated());
//! assert_eq!(image.unveil_text().expect("Failed to unveil"), "Hi");
//! ```
//!
//! ## Hide a message inside an image file
//!
//! ```rust
//! use image::RgbImage;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! RgbImage::new(32, 32).save(&carrier).expect("Failed to write carrier");
//!
//! stegotext_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_media(&carrier)
//!     .with_output(temp_dir.path().join("image-with-a-message.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = stegotext_core::api::unveil::prepare()
//!     .from_secret_file(temp_dir.path().join("image-with-a-message.png"))
//!     .execute()
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(message, "Hello, World!");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bits;
pub mod codec;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;
pub mod sentinel;
pub mod universal_decoder;
pub mod universal_encoder;

pub use crate::bits::{BitInput, BitString};
pub use crate::codec::{check_capacity, required_bits, EmbedReport, Unveiled};
pub use crate::error::SteganoError;
pub use crate::media::audio::{AudioParams, PcmBuffer};
pub use crate::media::{CapacityPolicy, Carrier, CodecOptions, Media, Persist};
pub use crate::result::Result;
pub use crate::sentinel::SENTINEL;
