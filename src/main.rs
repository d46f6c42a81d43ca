use std::io::{self, BufRead, Read};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use primeshare::cli::{Cli, Commands};
use primeshare::codec;
use primeshare::commands::{describe, reconstruct_to_json, split_to_json};
use primeshare::domain::{ShareCount, SplitConfig};
use primeshare::SharingService;

/// Read the secret securely from stdin (hidden input when TTY available)
fn read_secret() -> Result<Zeroizing<String>> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter secret (non-negative integer):");
        rpassword::read_password()
            .map(Zeroizing::new)
            .context("Failed to read secret from stdin")
    } else {
        // Non-interactive mode (piped input) - read directly from stdin
        let stdin = io::stdin();
        let mut handle = stdin.lock();
        let mut secret = Zeroizing::new(String::new());
        handle
            .read_line(&mut secret)
            .context("Failed to read secret from stdin")?;
        Ok(Zeroizing::new(secret.trim().to_string()))
    }
}

/// Read share input securely from stdin (hidden input when TTY available)
/// Interactive input is one share per line, followed by an empty line to finish;
/// piped input may also be a whole JSON document.
fn read_shares() -> Result<Zeroizing<String>> {
    if atty::is(atty::Stream::Stdin) {
        // Interactive mode - use rpassword for hidden input
        eprintln!("Enter shares as JSON (one per line, empty line to finish):");

        let mut lines = Vec::new();
        loop {
            let share = Zeroizing::new(
                rpassword::read_password().context("Failed to read share from stdin")?,
            );

            // Empty line signals we're done
            if share.trim().is_empty() {
                break;
            }

            lines.push(share);
        }

        let joined = lines
            .iter()
            .map(|line| line.trim())
            .collect::<Vec<_>>()
            .join("\n");
        Ok(Zeroizing::new(joined))
    } else {
        let mut input = Zeroizing::new(String::new());
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read shares from stdin")?;
        Ok(input)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let service = SharingService::new(cli.prime.unwrap_or_default());

    let output = match cli.command {
        Commands::Split { shares, threshold } => {
            let secret = read_secret()?;

            // Validate share count and create config
            let share_count = ShareCount::new(shares)?;
            let config = SplitConfig::new(threshold, share_count)?;

            split_to_json(&service, &secret, config)?
        }
        Commands::Reconstruct { threshold } => {
            let input = read_shares()?;
            reconstruct_to_json(&service, &input, threshold)?
        }
        Commands::Info => codec::to_json(&describe(&service))?,
    };

    println!("{output}");

    Ok(())
}
