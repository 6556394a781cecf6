//! Ternary lane packing for axis-aligned rotations
//!
//! An axis-aligned rotation matrix only holds -1, 0 and 1, so each of its nine
//! entries fits in a 2-bit code. Nine codes need 18 bits and are stored in three
//! bytes, most significant lane first:
//!
//! ```text
//! byte 0: [c0:2][c1:2][c2:2][c3:2]
//! byte 1: [c4:2][c5:2][c6:2][c7:2]
//! byte 2: [c8:2][000000]
//! ```

use crate::POSE_EPSILON;

/// Number of ternary codes in one packed matrix
pub const TERNARY_COUNT: usize = 9;

/// Size of the packed representation in bytes
pub const PACKED_TERNARY_SIZE: usize = 3;

/// Code for 0.0
pub const CODE_ZERO: u8 = 0;
/// Code for 1.0
pub const CODE_POS_ONE: u8 = 1;
/// Code for -1.0
pub const CODE_NEG_ONE: u8 = 2;

/// Classify a matrix entry as a ternary code.
///
/// Returns `None` when the value is not within [`POSE_EPSILON`] of -1, 0 or 1.
#[inline]
pub fn value_to_code(value: f32) -> Option<u8> {
    if value.abs() < POSE_EPSILON {
        Some(CODE_ZERO)
    } else if (value - 1.0).abs() < POSE_EPSILON {
        Some(CODE_POS_ONE)
    } else if (value + 1.0).abs() < POSE_EPSILON {
        Some(CODE_NEG_ONE)
    } else {
        None
    }
}

/// Reconstruct the exact matrix entry for a code.
///
/// Code 3 never appears in encoder output; it decodes as 0.0.
#[inline]
pub fn code_to_value(code: u8) -> f32 {
    match code {
        CODE_POS_ONE => 1.0,
        CODE_NEG_ONE => -1.0,
        _ => 0.0,
    }
}

/// Pack nine 2-bit codes into three bytes.
///
/// Only the low two bits of each code are used.
pub fn pack_ternary(codes: &[u8; TERNARY_COUNT]) -> [u8; PACKED_TERNARY_SIZE] {
    let lane = |c: u8, shift: u32| (c & 0x3) << shift;

    [
        lane(codes[0], 6) | lane(codes[1], 4) | lane(codes[2], 2) | lane(codes[3], 0),
        lane(codes[4], 6) | lane(codes[5], 4) | lane(codes[6], 2) | lane(codes[7], 0),
        lane(codes[8], 6),
    ]
}

/// Unpack three bytes into nine 2-bit codes.
///
/// Bits 5-0 of the last byte are ignored.
pub fn unpack_ternary(bytes: &[u8; PACKED_TERNARY_SIZE]) -> [u8; TERNARY_COUNT] {
    let lane = |b: u8, shift: u32| (b >> shift) & 0x3;

    [
        lane(bytes[0], 6),
        lane(bytes[0], 4),
        lane(bytes[0], 2),
        lane(bytes[0], 0),
        lane(bytes[1], 6),
        lane(bytes[1], 4),
        lane(bytes[1], 2),
        lane(bytes[1], 0),
        lane(bytes[2], 6),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_layout() {
        // c0 = 2 lands in bits 7-6 of byte 0, c3 = 1 in bits 1-0
        let codes = [2, 0, 0, 1, 0, 1, 0, 0, 2];
        let packed = pack_ternary(&codes);
        assert_eq!(packed, [0b1000_0001, 0b0001_0000, 0b1000_0000]);
    }

    #[test]
    fn test_identity_matrix_codes() {
        // Column-major identity: 1 0 0 / 0 1 0 / 0 0 1
        let codes = [1, 0, 0, 0, 1, 0, 0, 0, 1];
        let packed = pack_ternary(&codes);
        assert_eq!(packed, [0b0100_0000, 0b0100_0000, 0b0100_0000]);
        assert_eq!(unpack_ternary(&packed), codes);
    }

    #[test]
    fn test_last_byte_low_bits_zero() {
        let packed = pack_ternary(&[2; TERNARY_COUNT]);
        assert_eq!(packed[2] & 0x3F, 0);
    }

    #[test]
    fn test_unpack_ignores_trailing_bits() {
        let clean = [0b0100_0000, 0b0100_0000, 0b0100_0000];
        let noisy = [0b0100_0000, 0b0100_0000, 0b0111_1111];
        assert_eq!(unpack_ternary(&clean), unpack_ternary(&noisy));
    }

    #[test]
    fn test_code_value_mapping() {
        assert_eq!(code_to_value(CODE_ZERO), 0.0);
        assert_eq!(code_to_value(CODE_POS_ONE), 1.0);
        assert_eq!(code_to_value(CODE_NEG_ONE), -1.0);
        assert_eq!(code_to_value(3), 0.0);

        assert_eq!(value_to_code(0.0), Some(CODE_ZERO));
        assert_eq!(value_to_code(-4.371139e-8), Some(CODE_ZERO));
        assert_eq!(value_to_code(0.999_999_5), Some(CODE_POS_ONE));
        assert_eq!(value_to_code(-1.0), Some(CODE_NEG_ONE));
        assert_eq!(value_to_code(0.5), None);
        assert_eq!(value_to_code(0.001), None);
        assert_eq!(value_to_code(f32::NAN), None);
    }
}
