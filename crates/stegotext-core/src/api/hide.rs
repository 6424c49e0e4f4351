use std::path::{Path, PathBuf};

use log::info;

use crate::codec::EmbedReport;
use crate::media::{Carrier, CodecOptions, Media, Persist};
use crate::SteganoError;

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    media: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// The carrier media, an image or a WAV audio file, used readonly
    pub fn with_media<A: AsRef<Path>>(mut self, media: A) -> Self {
        self.media = Some(media.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Hides the message and writes the carrier to the output file.
    ///
    /// A message that does not fit is truncated, unless the options say otherwise.
    /// Check the returned report to find out.
    pub fn execute(self) -> Result<EmbedReport, SteganoError> {
        let Some(message) = self.message else {
            return Err(SteganoError::MissingMessage);
        };
        let Some(media) = self.media else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };

        let mut carrier = Media::from_file(&media)?;
        let report = carrier.hide_text(&message, &self.options)?;
        carrier.save_as(&output)?;
        info!(
            "hid {} of {} bits in {output:?}",
            report.embedded_bits, report.required_bits
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::test_utils::write_carrier_png;
    use crate::SteganoError;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = write_carrier_png(temp_dir.path(), 16, 16);

        let report = crate::api::hide::prepare()
            .with_message("Hello, World!")
            .with_media(carrier)
            .with_output(temp_dir.path().join("image-with-secret.png"))
            .execute()
            .expect("Failed to hide message in image");

        assert!(!report.is_truncated());
        assert!(temp_dir.path().join("image-with-secret.png").exists());
    }

    #[test]
    fn should_require_all_parts() {
        assert!(matches!(
            crate::api::hide::prepare().with_media("a.png").execute(),
            Err(SteganoError::MissingMessage)
        ));
        assert!(matches!(
            crate::api::hide::prepare().with_message("m").execute(),
            Err(SteganoError::CarrierNotSet)
        ));
        assert!(matches!(
            crate::api::hide::prepare()
                .with_message("m")
                .with_media("a.png")
                .execute(),
            Err(SteganoError::TargetNotSet)
        ));
    }
}
