//! Encode command - print the wire bytes of one transform

use anyhow::{Context, Result};
use clap::Args;
use nether_pose::glam::Vec3;
use nether_pose::{Classification, RigidTransform, encode};

/// Arguments for the encode command
#[derive(Args)]
pub struct EncodeArgs {
    /// Position as x,y,z
    #[arg(long, value_parser = parse_triple, default_value = "0,0,0", allow_hyphen_values = true)]
    pub position: [f32; 3],

    /// XYZ Euler angles as x,y,z (radians unless --degrees)
    #[arg(long, value_parser = parse_triple, default_value = "0,0,0", allow_hyphen_values = true)]
    pub euler: [f32; 3],

    /// Interpret --euler in degrees
    #[arg(long)]
    pub degrees: bool,
}

/// Execute the encode command
pub fn execute(args: EncodeArgs) -> Result<()> {
    let [mut x, mut y, mut z] = args.euler;
    if args.degrees {
        x = x.to_radians();
        y = y.to_radians();
        z = z.to_radians();
    }

    let transform = RigidTransform::from_euler_xyz(Vec3::from_array(args.position), x, y, z);

    let mut bytes = Vec::new();
    let classification = encode(&transform, &mut bytes);
    tracing::debug!("Classified as {:?}", classification);

    println!("kind:  {}", classification.kind());
    println!("size:  {} bytes", bytes.len());
    println!("{}", describe_payload(&classification));
    println!("hex:   {}", hex::encode(&bytes));

    Ok(())
}

fn describe_payload(classification: &Classification) -> String {
    match classification {
        Classification::Identity => "payload: none".to_string(),
        Classification::AxisAligned(codes) => format!("payload: codes {:?}", codes),
        Classification::SingleAxis { axis, angle } => {
            format!("payload: axis {:?} ({}), angle {} rad", axis, axis.id(), angle)
        }
        Classification::Euler([x, y, z]) => format!("payload: euler ({}, {}, {}) rad", x, y, z),
    }
}

/// Parse "a,b,c" into three floats
pub fn parse_triple(text: &str) -> Result<[f32; 3]> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        anyhow::bail!("expected three comma-separated values, got '{}'", text);
    }

    let mut out = [0.0f32; 3];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .with_context(|| format!("invalid number '{}'", part))?;
    }
    Ok(out)
}
