//! Pose encoder
//!
//! Every transform maps to exactly one encoding (the Euler fallback makes the
//! classification total), so encoding cannot fail.

use crate::classify::{Classification, classify};
use crate::packing::pack_ternary;
use crate::{ByteSink, RigidTransform};

/// Encode a transform into `sink`.
///
/// Reserves exactly the encoded size, then writes the tag byte, position
/// X/Y/Z and the kind-specific payload. Returns the classification used.
pub fn encode<W: ByteSink + ?Sized>(transform: &RigidTransform, sink: &mut W) -> Classification {
    let classification = classify(&transform.rotation);
    encode_classified(transform, &classification, sink);
    classification
}

// Callers go through `encode` so the ordered chain alone picks the kind
fn encode_classified<W: ByteSink + ?Sized>(
    transform: &RigidTransform,
    classification: &Classification,
    sink: &mut W,
) {
    let kind = classification.kind();
    sink.reserve(kind.encoded_size());

    // Header: tag + position
    sink.put_u8(kind.tag());
    sink.put_f32(transform.position.x);
    sink.put_f32(transform.position.y);
    sink.put_f32(transform.position.z);

    match *classification {
        Classification::Identity => {}
        Classification::AxisAligned(codes) => {
            sink.put_slice(&pack_ternary(&codes));
        }
        Classification::SingleAxis { axis, angle } => {
            sink.put_u8(axis.id());
            sink.put_f32(angle);
        }
        Classification::Euler([x, y, z]) => {
            sink.put_f32(x);
            sink.put_f32(y);
            sink.put_f32(z);
        }
    }
}

/// Encode a transform into a new buffer
pub fn encode_to_vec(transform: &RigidTransform) -> Vec<u8> {
    let mut bytes = Vec::new();
    encode(transform, &mut bytes);
    bytes
}

/// Size in bytes `transform` will encode to
pub fn encoded_size(transform: &RigidTransform) -> usize {
    classify(&transform.rotation).encoded_size()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat3, Vec3};
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_identity_encodes_minimal() {
        let mut bytes = Vec::new();
        let c = encode(&RigidTransform::IDENTITY, &mut bytes);
        assert_eq!(c, Classification::Identity);
        assert_eq!(bytes.len(), 13);
    }

    #[test]
    fn test_encode_follows_classification_chain() {
        let poses = [
            RigidTransform::IDENTITY,
            RigidTransform::new(Vec3::X, Mat3::from_rotation_z(PI)),
            RigidTransform::new(Vec3::Y, Mat3::from_rotation_x(FRAC_PI_2)),
            RigidTransform::new(Vec3::Z, Mat3::from_rotation_y(0.4)),
            RigidTransform::from_euler_xyz(Vec3::ONE, 0.1, 0.2, 0.3),
        ];
        for t in &poses {
            let mut bytes = Vec::new();
            let c = encode(t, &mut bytes);
            assert_eq!(c, classify(&t.rotation));
            assert_eq!(bytes.len(), c.encoded_size());
            assert_eq!(bytes.len(), encoded_size(t));
            assert_eq!(bytes[0], c.kind().tag());
        }
    }
}
