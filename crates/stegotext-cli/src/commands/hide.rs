use std::path::PathBuf;

use clap::Args;
use log::warn;
use stegotext_core::CodecOptions;

use crate::CliResult;

/// Hides a text message in an image or WAV audio file
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Media file such as PNG image or WAV audio file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final media will be stored as file, images are always written as PNG
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output media file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden, characters up to U+00FF only
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let report = stegotext_core::commands::hide(
            &self.media,
            &self.write_to_file,
            &self.message,
            options,
        )?;

        if report.is_truncated() {
            warn!(
                "The message did not fit, only {} of {} bits were hidden and it cannot be unveiled",
                report.embedded_bits, report.required_bits
            );
        }

        Ok(())
    }
}
