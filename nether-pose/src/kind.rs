//! Wire discriminants: encoding tags and single-axis ids

use crate::{AXIS_ALIGNED_SIZE, EULER_SIZE, HEADER_SIZE, IDENTITY_SIZE, SINGLE_AXIS_SIZE};

/// Encoding selected for a transform's orientation.
///
/// The discriminants are protocol constants written as the leading tag byte.
/// They do not follow classification priority (`Euler` is the fallback but
/// carries tag 0) and must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EncodingKind {
    /// Full XYZ Euler triple (25 bytes)
    Euler = 0,
    /// No rotation (13 bytes)
    Identity = 1,
    /// Every matrix entry is -1, 0 or 1 (16 bytes)
    AxisAligned = 2,
    /// One non-zero angle about a principal axis (18 bytes)
    SingleAxis = 3,
}

impl EncodingKind {
    /// All kinds, in tag order
    pub const ALL: [Self; 4] = [
        Self::Euler,
        Self::Identity,
        Self::AxisAligned,
        Self::SingleAxis,
    ];

    /// Tag byte written on the wire
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Map a tag byte back to a kind, `None` for undefined tags
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Euler),
            1 => Some(Self::Identity),
            2 => Some(Self::AxisAligned),
            3 => Some(Self::SingleAxis),
            _ => None,
        }
    }

    /// Total encoded size in bytes, tag and position included
    pub const fn encoded_size(self) -> usize {
        match self {
            Self::Euler => EULER_SIZE,
            Self::Identity => IDENTITY_SIZE,
            Self::AxisAligned => AXIS_ALIGNED_SIZE,
            Self::SingleAxis => SINGLE_AXIS_SIZE,
        }
    }

    /// Payload size after the 13-byte header
    pub const fn payload_size(self) -> usize {
        self.encoded_size() - HEADER_SIZE
    }

    /// Lowercase name used in logs and CLI output
    pub const fn name(self) -> &'static str {
        match self {
            Self::Euler => "euler",
            Self::Identity => "identity",
            Self::AxisAligned => "axis-aligned",
            Self::SingleAxis => "single-axis",
        }
    }
}

impl std::fmt::Display for EncodingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Principal axis of a single-axis rotation.
///
/// Discriminants are the axis id byte stored in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RotationAxis {
    X = 1,
    Y = 2,
    Z = 3,
}

impl RotationAxis {
    /// Axis id byte written on the wire
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Map an axis id back to an axis, `None` for anything but 1, 2, 3
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::X),
            2 => Some(Self::Y),
            3 => Some(Self::Z),
            _ => None,
        }
    }

    /// Rotation of `angle` radians about this axis
    pub fn rotation(self, angle: f32) -> glam::Mat3 {
        match self {
            Self::X => glam::Mat3::from_rotation_x(angle),
            Self::Y => glam::Mat3::from_rotation_y(angle),
            Self::Z => glam::Mat3::from_rotation_z(angle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_wire_constants() {
        assert_eq!(EncodingKind::Euler.tag(), 0);
        assert_eq!(EncodingKind::Identity.tag(), 1);
        assert_eq!(EncodingKind::AxisAligned.tag(), 2);
        assert_eq!(EncodingKind::SingleAxis.tag(), 3);
    }

    #[test]
    fn test_from_tag() {
        for kind in EncodingKind::ALL {
            assert_eq!(EncodingKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(EncodingKind::from_tag(4), None);
        assert_eq!(EncodingKind::from_tag(255), None);
    }

    #[test]
    fn test_sizes() {
        assert_eq!(EncodingKind::Identity.encoded_size(), 13);
        assert_eq!(EncodingKind::AxisAligned.encoded_size(), 16);
        assert_eq!(EncodingKind::SingleAxis.encoded_size(), 18);
        assert_eq!(EncodingKind::Euler.encoded_size(), 25);

        assert_eq!(EncodingKind::Identity.payload_size(), 0);
        assert_eq!(EncodingKind::AxisAligned.payload_size(), 3);
        assert_eq!(EncodingKind::SingleAxis.payload_size(), 5);
        assert_eq!(EncodingKind::Euler.payload_size(), 12);
    }

    #[test]
    fn test_axis_ids() {
        assert_eq!(RotationAxis::X.id(), 1);
        assert_eq!(RotationAxis::Y.id(), 2);
        assert_eq!(RotationAxis::Z.id(), 3);
        assert_eq!(RotationAxis::from_id(0), None);
        assert_eq!(RotationAxis::from_id(4), None);
        assert_eq!(RotationAxis::from_id(2), Some(RotationAxis::Y));
    }
}
