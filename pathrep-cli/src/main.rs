//! Main entry point for the pathrep CLI.
//!
//! This is the command-line interface for the pathrep representation
//! layer. It provides commands for working with path representations:
//! - `decode`: surface a raw OS path as escaped text
//! - `encode`: turn escaped text back into exact raw bytes
//! - `resolve`: run a path through the resolver under a constraint set
//! - `scan`: list directory entries in the root's variant

mod cli;
mod commands;
mod error;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let logger = pathrep::init_logger(cli.verbose, cli.quiet);

    let result = match cli.command {
        cli::Command::Decode(cmd) => cmd.execute(&logger),
        cli::Command::Encode(cmd) => cmd.execute(&logger),
        cli::Command::Resolve(cmd) => cmd.execute(&logger),
        cli::Command::Scan(cmd) => cmd.execute(&logger),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            logger.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}
