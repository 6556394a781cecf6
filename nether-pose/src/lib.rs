//! Nether-Pose: adaptive rigid-transform codec for Nethercore
//!
//! Converts a rigid transform (position + orientation) to and from a compact
//! tagged byte encoding for netplay state replication and replay snapshots.
//! The encoder picks the cheapest of four layouts for the orientation; the
//! decoder dispatches on the leading tag byte.
//!
//! **This is a pure codec** - byte streams, framing and the type registry that
//! routes values here belong to the caller. The codec reaches them only through
//! the [`ByteSink`], [`ByteSource`] and [`WireCodec`] traits.
//!
//! # Wire Format
//!
//! ```text
//! 0x00: tag u8              - EncodingKind
//! 0x01: position [f32; 3]   - X, Y, Z (LE)
//! 0x0D: payload             - depends on tag
//! ```
//!
//! | Tag | Kind        | Size | Payload                                    |
//! |-----|-------------|------|--------------------------------------------|
//! | 0   | Euler       | 25   | `[f32; 3]` XYZ angles, radians             |
//! | 1   | Identity    | 13   | none                                       |
//! | 2   | AxisAligned | 16   | 3 bytes, nine 2-bit matrix codes           |
//! | 3   | SingleAxis  | 18   | axis id u8 (1=X, 2=Y, 3=Z) + `f32` angle   |
//!
//! Identity, axis-aligned and single-axis orientations round-trip exactly
//! (single-axis up to the angle's f32 rounding). General orientations come
//! back within f32 + trig rounding of the original.
//!
//! # Usage
//!
//! ```
//! use glam::{Mat3, Vec3};
//! use nether_pose::{EncodingKind, RigidTransform, decode, encode_to_vec};
//!
//! let pose = RigidTransform::new(Vec3::ZERO, Mat3::from_rotation_z(std::f32::consts::PI));
//! let bytes = encode_to_vec(&pose);
//! assert_eq!(bytes[0], EncodingKind::AxisAligned.tag());
//! assert_eq!(bytes.len(), 16);
//!
//! let (decoded, consumed) = decode(bytes.as_slice(), 0).unwrap();
//! assert_eq!(consumed, 16);
//! assert!(decoded.max_abs_diff(&pose) < 1e-6);
//! ```

pub mod classify;
mod codec;
mod config;
mod decode;
mod encode;
mod error;
mod kind;
pub mod packing;
mod stream;
mod transform;
mod wire;


// Re-export public API
pub use classify::{Classification, classify};
pub use codec::{PoseCodec, WireCodec};
pub use config::{CodecConfig, DecodeConfig, DecodeMode};
pub use decode::{decode, decode_with_mode, peek_tag};
pub use encode::{encode, encode_to_vec, encoded_size};
pub use error::{ConfigError, PoseError};
pub use kind::{EncodingKind, RotationAxis};
pub use stream::{DecodedPose, PoseStream, StreamStats, decode_stream, encode_stream};
pub use transform::RigidTransform;
pub use wire::{ByteSink, ByteSource};

// Re-export glam so callers build transforms with the same version
pub use glam;

// =============================================================================
// Constants
// =============================================================================

/// Tolerance shared by every classification test. Decoding uses no epsilon.
pub const POSE_EPSILON: f32 = 1e-5;

/// Tag byte + position (1 + 3 × 4)
pub const HEADER_SIZE: usize = 13;

/// Identity record size (header only)
pub const IDENTITY_SIZE: usize = HEADER_SIZE;

/// Axis-aligned record size (header + 3 packed bytes)
pub const AXIS_ALIGNED_SIZE: usize = HEADER_SIZE + 3;

/// Single-axis record size (header + axis id + angle)
pub const SINGLE_AXIS_SIZE: usize = HEADER_SIZE + 1 + 4;

/// Euler record size (header + 3 angles)
pub const EULER_SIZE: usize = HEADER_SIZE + 3 * 4;

/// Largest record any tag can produce
pub const MAX_ENCODED_SIZE: usize = EULER_SIZE;
