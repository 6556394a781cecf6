//! Decode command - walk a hex pose stream record by record

use anyhow::{Context, Result};
use clap::Args;
use nether_pose::{CodecConfig, DecodeMode, DecodedPose, PoseCodec, PoseStream, StreamStats};
use std::path::PathBuf;

/// Arguments for the decode command
#[derive(Args)]
pub struct DecodeArgs {
    /// Hex-encoded pose stream (whitespace is ignored)
    pub stream: String,

    /// Codec config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report malformed records as errors (overrides the config file)
    #[arg(long)]
    pub strict: bool,
}

/// Execute the decode command
pub fn execute(args: DecodeArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => CodecConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CodecConfig::default(),
    };
    if args.strict {
        config.decode.mode = DecodeMode::Strict;
    }

    let bytes = parse_hex(&args.stream)?;
    tracing::info!(
        "Decoding {} bytes ({:?} mode)",
        bytes.len(),
        config.decode.mode
    );

    let mut stats = StreamStats::default();
    for record in PoseStream::with_codec(&bytes, PoseCodec::new(config)) {
        let pose = record.context("Failed to decode pose stream")?;
        println!("{}", describe_pose(&pose));
        stats.record(&pose);
    }

    println!();
    println!("records: {}", stats.records());
    for kind in nether_pose::EncodingKind::ALL {
        let count = stats.count(kind);
        if count > 0 {
            println!("  {:<12} {}", kind.name(), count);
        }
    }
    if stats.unknown > 0 {
        println!("  {:<12} {}", "unknown", stats.unknown);
    }
    println!(
        "bytes:   {} ({:.1} per record)",
        stats.total_bytes,
        stats.average_size()
    );

    Ok(())
}

fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&cleaned).context("Stream is not valid hex")
}

fn describe_pose(pose: &DecodedPose) -> String {
    let kind = match pose.kind() {
        Some(kind) => kind.name().to_string(),
        None => format!("unknown({})", pose.tag),
    };
    let p = pose.transform.position;
    let (x, y, z) = pose.transform.euler_xyz();
    format!(
        "@{:<5} {:<12} pos ({}, {}, {})  euler ({:.4}, {:.4}, {:.4})  [{} bytes]",
        pose.offset, kind, p.x, p.y, p.z, x, y, z, pose.consumed
    )
}
