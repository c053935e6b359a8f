//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive
//! macros, including global options and subcommands.

use crate::commands::{DecodeCommand, EncodeCommand, ResolveCommand, ScanCommand};
use clap::{Parser, Subcommand};

/// Command-line tool for inspecting and transcoding path representations.
#[derive(Parser)]
#[command(name = "pathrep")]
#[command(version, about = "Inspect and transcode path representations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Surface a raw OS path as escaped text
    Decode(DecodeCommand),

    /// Turn escaped text back into exact raw bytes
    Encode(EncodeCommand),

    /// Run a value through the resolver under a constraint set
    Resolve(ResolveCommand),

    /// List directory entries in the root's variant
    Scan(ScanCommand),
}
