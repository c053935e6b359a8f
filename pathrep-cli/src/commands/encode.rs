//! Encode command implementation.
//!
//! Turns escaped text back into the exact raw bytes it decoded from,
//! writing them to stdout raw or as hex.

use std::io::Write;

use clap::Args;

use crate::error::CliError;
use pathrep::{EncodingContext, Logger};

/// Turn escaped text back into exact raw bytes.
#[derive(Args)]
pub struct EncodeCommand {
    /// The text to encode
    pub text: String,

    /// Print the bytes as lowercase hex instead of writing them raw
    #[arg(long)]
    pub hex: bool,
}

impl EncodeCommand {
    /// Execute the encode command.
    pub fn execute(self, logger: &Logger) -> Result<(), CliError> {
        let ctx = EncodingContext::global();
        let bytes = ctx.encode(&self.text)?;
        logger.debug(&format!("encoded {} byte(s)", bytes.len()));

        if self.hex {
            let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
            println!("{hex}");
        } else {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.write_all(b"\n")?;
        }
        Ok(())
    }
}
