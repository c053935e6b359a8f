//! Scan command implementation.
//!
//! Lists directory entries in the scan root's variant, as a table or
//! JSON. The root defaults to the platform's native variant; `--text`
//! transcodes the root first, so the scan yields textual entries.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::commands::display_value;
use crate::error::CliError;
use pathrep::{scan_dir, EncodingContext, Logger, PathValue};

/// List directory entries in the root's variant.
#[derive(Args)]
pub struct ScanCommand {
    /// The directory to scan
    pub dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,

    /// Scan with a textual root instead of the platform's native variant
    #[arg(long)]
    pub text: bool,
}

/// Output format for the scan command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One entry name per line.
    Table,
    /// JSON array of entries with kind tags.
    Json,
}

impl ScanCommand {
    /// Execute the scan command.
    pub fn execute(self, logger: &Logger) -> Result<(), CliError> {
        let ctx = EncodingContext::global();

        let mut root = PathValue::from_os_str(self.dir.as_os_str())?;
        if self.text {
            root = ctx.to_text(root)?;
        }

        let entries = scan_dir(&root, ctx)?;
        let suffix = if entries.len() == 1 { "y" } else { "ies" };
        logger.info(&format!("{} entr{suffix}", entries.len()));

        match self.format {
            OutputFormat::Table => {
                for entry in &entries {
                    println!("{}", display_value(entry.name()));
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&entries)
                    .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
                println!("{json}");
            }
        }
        Ok(())
    }
}
