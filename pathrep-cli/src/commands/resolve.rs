//! Resolve command implementation.
//!
//! Runs a path argument through the resolver under a caller-declared
//! constraint set, reporting the resulting variant and contents. A
//! constraint the native variant cannot satisfy fails with exit code 1,
//! exactly as the library refuses to transcode implicitly.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::commands::display_value;
use crate::error::CliError;
use pathrep::{resolve, KindSet, Logger, PathInput};

/// Run a value through the resolver under a constraint set.
#[derive(Args)]
pub struct ResolveCommand {
    /// The path to resolve; taken as raw OS bytes, not Unicode
    pub path: PathBuf,

    /// Acceptable result variants
    #[arg(long, value_enum, default_value = "any", ignore_case = true)]
    pub kind: KindArg,
}

/// Constraint set selector.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum KindArg {
    /// Only the textual variant.
    Text,
    /// Only the raw byte variant.
    Bytes,
    /// Either variant.
    Any,
}

impl From<KindArg> for KindSet {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Text => KindSet::TEXT,
            KindArg::Bytes => KindSet::BYTES,
            KindArg::Any => KindSet::ANY,
        }
    }
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, logger: &Logger) -> Result<(), CliError> {
        let accepted = KindSet::from(self.kind);
        logger.debug(&format!("resolving under constraint set {accepted}"));

        let value = resolve(PathInput::capable(&self.path), accepted)?;
        println!("{}: {}", value.kind(), display_value(&value));
        Ok(())
    }
}
