//! Four in a Row - interactive host.
//!
//! Stands in for the channel endpoint: each stdin line is written to the
//! game channel as bytes, then the pending reply is drained and printed.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use fourinarow::{ChannelError, Dispatcher, GameChannel, RandomSelector};
use std::io::{BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { seed } => run_play(seed),
    }
}

/// Run the interactive command loop.
fn run_play(seed: Option<u64>) -> Result<()> {
    let channel = match seed {
        Some(seed) => {
            info!(seed, "using seeded computer opponent");
            GameChannel::with_dispatcher(Dispatcher::with_selector(Box::new(
                RandomSelector::seeded(seed),
            )))
        }
        None => GameChannel::new(),
    };

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut buf = [0u8; 256];

    println!("Commands: RESET <R|Y>, DROPC <A-H>, CTURN, BOARD (Ctrl-D quits)");
    for line in stdin.lock().lines() {
        let mut line = line?;
        line.push('\n');
        match channel.write(line.as_bytes()) {
            Ok(_) => {}
            Err(error @ ChannelError::TooLong { .. }) => {
                eprintln!("{error}");
                continue;
            }
            Err(error) => return Err(error.into()),
        }
        let n = channel.read(&mut buf)?;
        if n > 0 {
            stdout.write_all(&buf[..n])?;
            stdout.flush()?;
        }
    }

    Ok(())
}
