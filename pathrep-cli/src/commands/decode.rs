//! Decode command implementation.
//!
//! Surfaces a raw OS path argument as escaped text using the
//! process-wide encoding context. The output re-encodes to the exact
//! original bytes.

use std::path::PathBuf;

use clap::Args;

use crate::error::CliError;
use pathrep::{EncodingContext, Logger, PathValue};

/// Surface a raw OS path as escaped text.
#[derive(Args)]
pub struct DecodeCommand {
    /// The path to decode; taken as raw OS bytes, not Unicode
    pub path: PathBuf,
}

impl DecodeCommand {
    /// Execute the decode command.
    pub fn execute(self, logger: &Logger) -> Result<(), CliError> {
        let ctx = EncodingContext::global();
        logger.debug(&format!("decoding under {}", ctx.encoding()));

        let text = match PathValue::from_os_str(self.path.as_os_str())? {
            PathValue::Text(text) => text,
            PathValue::Bytes(bytes) => ctx.decode(&bytes)?,
        };
        println!("{text}");
        Ok(())
    }
}
