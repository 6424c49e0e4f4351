use clap::{Parser, Subcommand};
use stegotext_core::{CapacityPolicy, CodecOptions};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Fail instead of silently truncating a message that does not fit into the media
    #[arg(long = "strict-capacity", global = true)]
    pub strict_capacity: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> CodecOptions {
        let policy = if self.strict_capacity {
            CapacityPolicy::Reject
        } else {
            CapacityPolicy::Truncate
        };

        CodecOptions::default().with_capacity_policy(policy)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
}
