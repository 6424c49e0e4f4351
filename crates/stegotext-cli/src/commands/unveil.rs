use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Unveils a text message from an image or WAV audio file
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source media that contains a secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let message = stegotext_core::commands::unveil(&self.media)?;
        println!("{message}");

        Ok(())
    }
}
