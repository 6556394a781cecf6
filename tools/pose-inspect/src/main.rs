//! nether-pose - inspect Nethercore pose encodings
//!
//! # Commands
//!
//! - `nether-pose encode` - Encode one transform and print its bytes
//! - `nether-pose decode` - Decode a hex pose stream record by record
//!
//! # Usage
//!
//! ```bash
//! # 45° about Y, printed as hex
//! nether-pose encode --position 1,2,3 --euler 0,45,0 --degrees
//!
//! # Walk a captured stream
//! nether-pose decode 0100008...
//!
//! # Fail on malformed records instead of degrading them
//! nether-pose decode --strict 0100008...
//! ```

mod decode;
mod encode;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// nether-pose - inspect Nethercore pose encodings
#[derive(Parser)]
#[command(name = "nether-pose")]
#[command(about = "Encode and inspect Nethercore rigid-transform streams")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a single transform and print its wire bytes
    Encode(encode::EncodeArgs),

    /// Decode a hex-encoded stream of transforms
    Decode(decode::DecodeArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(args) => encode::execute(args),
        Commands::Decode(args) => decode::execute(args),
    }
}
