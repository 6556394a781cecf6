//! Pose decoder
//!
//! Reads the tag at the cursor, the position after it, then dispatches on the
//! tag. All offsets are absolute and computed from the cursor; the caller
//! advances its own cursor by the returned byte count.
//!
//! Malformed discriminators are not errors in permissive mode:
//!
//! | Input                       | Result           | Consumed |
//! |-----------------------------|------------------|----------|
//! | unknown tag                 | translation only | 13       |
//! | single-axis, axis id ∉ 1..3 | translation only | 18       |
//!
//! The consumed counts differ on purpose. Existing peers skip 18 bytes for a
//! single-axis record regardless of its axis byte, and treat an unknown tag as
//! a bare header.

use glam::{EulerRot, Mat3, Vec3};

use crate::packing::{code_to_value, unpack_ternary};
use crate::{
    ByteSource, DecodeMode, EncodingKind, HEADER_SIZE, PoseError, RigidTransform, RotationAxis,
};

/// Offset of the payload relative to the cursor
const PAYLOAD_OFFSET: usize = HEADER_SIZE;

/// Decode one transform at `cursor` in permissive mode.
///
/// Returns the transform and the number of bytes consumed.
pub fn decode<S: ByteSource + ?Sized>(
    bytes: &S,
    cursor: usize,
) -> Result<(RigidTransform, usize), PoseError> {
    decode_with_mode(bytes, cursor, DecodeMode::Permissive)
}

/// Decode one transform at `cursor`.
///
/// # Errors
/// - [`PoseError::Truncated`] if the source ends before the encoding does
/// - [`PoseError::UnknownTag`] / [`PoseError::InvalidAxis`] in strict mode only
pub fn decode_with_mode<S: ByteSource + ?Sized>(
    bytes: &S,
    cursor: usize,
    mode: DecodeMode,
) -> Result<(RigidTransform, usize), PoseError> {
    let reader = Reader::new(bytes, cursor);

    // Header is common to every tag, including undefined ones
    reader.require(HEADER_SIZE)?;
    let tag = reader.u8(0)?;
    let position = Vec3::new(reader.f32(1)?, reader.f32(5)?, reader.f32(9)?);
    let translation = RigidTransform::from_translation(position);

    let Some(kind) = EncodingKind::from_tag(tag) else {
        if mode == DecodeMode::Strict {
            return Err(PoseError::UnknownTag(tag));
        }
        tracing::debug!("Unknown pose tag {} at offset {}, decoding as translation", tag, cursor);
        return Ok((translation, HEADER_SIZE));
    };

    let consumed = kind.encoded_size();
    reader.require(consumed)?;

    let transform = match kind {
        EncodingKind::Identity => translation,
        EncodingKind::AxisAligned => {
            let codes = unpack_ternary(&reader.array::<3>(PAYLOAD_OFFSET)?);
            let entries = codes.map(code_to_value);
            // No orthonormality check; entries are taken as written
            translation.with_rotation(Mat3::from_cols_array(&entries))
        }
        EncodingKind::SingleAxis => {
            let axis_id = reader.u8(PAYLOAD_OFFSET)?;
            let angle = reader.f32(PAYLOAD_OFFSET + 1)?;
            match RotationAxis::from_id(axis_id) {
                Some(axis) => translation.with_rotation(axis.rotation(angle)),
                None if mode == DecodeMode::Strict => {
                    return Err(PoseError::InvalidAxis(axis_id));
                }
                None => {
                    tracing::debug!(
                        "Invalid rotation axis {} at offset {}, dropping rotation",
                        axis_id,
                        cursor
                    );
                    translation
                }
            }
        }
        EncodingKind::Euler => {
            let x = reader.f32(PAYLOAD_OFFSET)?;
            let y = reader.f32(PAYLOAD_OFFSET + 4)?;
            let z = reader.f32(PAYLOAD_OFFSET + 8)?;
            translation.with_rotation(Mat3::from_euler(EulerRot::XYZ, x, y, z))
        }
    };

    Ok((transform, consumed))
}

/// Tag byte at `cursor` without decoding anything else
pub fn peek_tag<S: ByteSource + ?Sized>(bytes: &S, cursor: usize) -> Option<u8> {
    bytes.read_u8_at(cursor)
}

/// Cursor-relative reads that report truncation against the whole record
struct Reader<'a, S: ?Sized> {
    bytes: &'a S,
    cursor: usize,
}

impl<'a, S: ByteSource + ?Sized> Reader<'a, S> {
    fn new(bytes: &'a S, cursor: usize) -> Self {
        Self { bytes, cursor }
    }

    fn truncated(&self, needed: usize) -> PoseError {
        PoseError::Truncated {
            offset: self.cursor,
            needed,
            available: self.bytes.len().saturating_sub(self.cursor),
        }
    }

    fn require(&self, needed: usize) -> Result<(), PoseError> {
        match self.cursor.checked_add(needed) {
            Some(end) if end <= self.bytes.len() => Ok(()),
            _ => Err(self.truncated(needed)),
        }
    }

    fn u8(&self, at: usize) -> Result<u8, PoseError> {
        self.bytes
            .read_u8_at(self.cursor + at)
            .ok_or_else(|| self.truncated(at + 1))
    }

    fn f32(&self, at: usize) -> Result<f32, PoseError> {
        self.bytes
            .read_f32_at(self.cursor + at)
            .ok_or_else(|| self.truncated(at + 4))
    }

    fn array<const N: usize>(&self, at: usize) -> Result<[u8; N], PoseError> {
        self.bytes
            .read_array_at::<N>(self.cursor + at)
            .ok_or_else(|| self.truncated(at + N))
    }
}
