use std::path::{Path, PathBuf};

use crate::codec::Unveiled;
use crate::media::{Carrier, Media};
use crate::SteganoError;

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
}

impl UnveilApi {
    /// This is the secret image or audio that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and returns the message.
    ///
    /// Fails with `NoSecretData` when the media carries no terminated message,
    /// an empty but terminated message is returned as empty string.
    pub fn execute(self) -> Result<String, SteganoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };

        match Media::from_file(&secret_media)?.unveil()? {
            Unveiled::Message(message) => Ok(message),
            Unveiled::NotFound => Err(SteganoError::NoSecretData),
        }
    }
}
