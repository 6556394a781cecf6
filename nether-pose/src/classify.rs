//! Rotation classification
//!
//! Picks the cheapest wire encoding for an orientation. The rules are an
//! ordered guard chain and the first match wins. Order is part of the wire
//! contract: the rule domains overlap (a 90° turn about X is both axis-aligned
//! and single-axis) and every peer must pick the same kind for a given
//! rotation.
//!
//! | Order | Rule        | Size |
//! |-------|-------------|------|
//! | 1     | Identity    | 13   |
//! | 2     | AxisAligned | 16   |
//! | 3     | SingleAxis  | 18   |
//! | 4     | Euler       | 25   |

use glam::{EulerRot, Mat3};

use crate::packing::{TERNARY_COUNT, value_to_code};
use crate::{EncodingKind, POSE_EPSILON, RotationAxis};

/// Result of classifying a rotation, carrying the kind-specific payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    /// No rotation
    Identity,
    /// Ternary codes for the nine matrix entries, column-major
    AxisAligned([u8; TERNARY_COUNT]),
    /// One non-zero angle (radians) about a principal axis
    SingleAxis { axis: RotationAxis, angle: f32 },
    /// XYZ Euler angles (radians)
    Euler([f32; 3]),
}

impl Classification {
    /// Wire kind for this classification
    pub fn kind(&self) -> EncodingKind {
        match self {
            Self::Identity => EncodingKind::Identity,
            Self::AxisAligned(_) => EncodingKind::AxisAligned,
            Self::SingleAxis { .. } => EncodingKind::SingleAxis,
            Self::Euler(_) => EncodingKind::Euler,
        }
    }

    /// Total encoded size in bytes
    pub fn encoded_size(&self) -> usize {
        self.kind().encoded_size()
    }
}

/// Classify a rotation matrix.
pub fn classify(rotation: &Mat3) -> Classification {
    let (x, y, z) = rotation.to_euler(EulerRot::XYZ);
    let angles = [x, y, z];

    if is_identity(&angles) {
        return Classification::Identity;
    }

    // Must run before the single-axis rule: quarter turns match both and
    // the axis-aligned form is 2 bytes smaller.
    if let Some(codes) = axis_aligned_codes(rotation) {
        return Classification::AxisAligned(codes);
    }

    if let Some((axis, angle)) = single_axis(&angles) {
        return Classification::SingleAxis { axis, angle };
    }

    Classification::Euler(angles)
}

/// All three Euler angles are below epsilon
pub fn is_identity(angles: &[f32; 3]) -> bool {
    angles.iter().all(|a| a.abs() < POSE_EPSILON)
}

/// Ternary codes for every entry, or `None` if any entry is not near -1, 0 or 1
pub fn axis_aligned_codes(rotation: &Mat3) -> Option<[u8; TERNARY_COUNT]> {
    let entries = rotation.to_cols_array();
    let mut codes = [0u8; TERNARY_COUNT];
    for (code, &value) in codes.iter_mut().zip(entries.iter()) {
        *code = value_to_code(value)?;
    }
    Some(codes)
}

/// The single rotated axis and its angle, if exactly one angle is non-zero.
///
/// Axes are tested X, then Y, then Z.
pub fn single_axis(angles: &[f32; 3]) -> Option<(RotationAxis, f32)> {
    let [x, y, z] = *angles;
    let zero = |a: f32| a.abs() < POSE_EPSILON;
    let rotated = |a: f32| a.abs() >= POSE_EPSILON;

    if rotated(x) && zero(y) && zero(z) {
        Some((RotationAxis::X, x))
    } else if zero(x) && rotated(y) && zero(z) {
        Some((RotationAxis::Y, y))
    } else if zero(x) && zero(y) && rotated(z) {
        Some((RotationAxis::Z, z))
    } else {
        None
    }
}
