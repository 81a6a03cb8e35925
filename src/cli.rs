//! Command-line interface for the fourinarow host binary.

use clap::{Parser, Subcommand};

/// Four in a Row - connect-four over a text command channel
#[derive(Parser, Debug)]
#[command(name = "fourinarow")]
#[command(about = "Play connect-four against a random computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive command loop (stdin in, stdout out)
    Play {
        /// Seed for the computer's column choices (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}
