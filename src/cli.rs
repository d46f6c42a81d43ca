use clap::{Parser, Subcommand};

use crate::domain::{Modulus, Threshold};

/// Validates that threshold is at least 2
/// A threshold of 1 defeats the purpose of secret sharing
/// (any single share would be the secret itself)
fn validate_threshold(s: &str) -> Result<Threshold, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    Threshold::new(value).map_err(|e| e.to_string())
}

/// Validates that the field modulus is a prime of at least 3
fn validate_modulus(s: &str) -> Result<Modulus, String> {
    s.parse().map_err(|e: crate::error::SharingError| e.to_string())
}

#[derive(Parser)]
#[command(name = "primeshare")]
#[command(about = "Split integer secrets into (k, n) threshold shares over a prime field")]
#[command(version)]
pub struct Cli {
    /// Field modulus P (decimal prime); defaults to 2^127 - 1
    #[arg(long, global = true, env = "PRIMESHARE_PRIME", value_parser = validate_modulus)]
    pub prime: Option<Modulus>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a secret read from stdin into shares
    Split {
        /// Number of shares to create
        #[arg(short, long)]
        shares: u32,

        /// Threshold: minimum number of shares needed to reconstruct (must be >= 2)
        #[arg(short, long, value_parser = validate_threshold)]
        threshold: Threshold,
    },
    /// Reconstruct the secret from shares read from stdin
    Reconstruct {
        /// Advertised threshold; overrides one embedded in the input
        #[arg(short, long)]
        threshold: Option<u32>,
    },
    /// Show the algorithm and field modulus
    Info,
}
