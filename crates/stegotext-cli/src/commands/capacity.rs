use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Shows how much text fits into an image or WAV audio file
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Media file such as PNG image or WAV audio file
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Checks if this message would fit without being truncated
    #[arg(short, long, value_name = "text message")]
    pub message: Option<String>,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let capacity = stegotext_core::commands::capacity(&self.media)?;
        println!(
            "{} bits, up to {} characters",
            capacity.bits,
            capacity.max_characters()
        );

        if let Some(message) = self.message {
            capacity.check(&message)?;
            println!("The message fits");
        }

        Ok(())
    }
}
