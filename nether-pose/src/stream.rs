//! Concatenated pose streams
//!
//! Replication snapshots and replay frames carry several transforms back to
//! back with no framing between them. The tag of each record determines its
//! length, so a reader walks the buffer by adding each reported byte count to
//! its cursor.

use crate::{EncodingKind, PoseCodec, PoseError, RigidTransform, WireCodec, encode};

/// Encode transforms back to back into a new buffer
pub fn encode_stream(transforms: &[RigidTransform]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for t in transforms {
        encode(t, &mut bytes);
    }
    bytes
}

/// One decoded record of a pose stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedPose {
    /// Offset of the record's tag byte
    pub offset: usize,
    /// Raw tag byte (may be undefined in permissive mode)
    pub tag: u8,
    /// Reconstructed transform
    pub transform: RigidTransform,
    /// Bytes the record occupied
    pub consumed: usize,
}

impl DecodedPose {
    /// Kind for the tag, `None` if the tag was undefined
    pub fn kind(&self) -> Option<EncodingKind> {
        EncodingKind::from_tag(self.tag)
    }
}

/// Iterator decoding consecutive poses from a byte buffer.
///
/// Yields `Err` once on malformed or truncated input and then stops.
pub struct PoseStream<'a> {
    bytes: &'a [u8],
    cursor: usize,
    codec: PoseCodec,
    failed: bool,
}

impl<'a> PoseStream<'a> {
    /// Permissive stream over `bytes`
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_codec(bytes, PoseCodec::default())
    }

    pub fn with_codec(bytes: &'a [u8], codec: PoseCodec) -> Self {
        Self {
            bytes,
            cursor: 0,
            codec,
            failed: false,
        }
    }

    /// Offset of the next record
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Bytes not yet decoded
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.cursor
    }
}

impl Iterator for PoseStream<'_> {
    type Item = Result<DecodedPose, PoseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor >= self.bytes.len() {
            return None;
        }

        let offset = self.cursor;
        let tag = self.bytes[offset];
        match self.codec.read(self.bytes, offset) {
            Ok((transform, consumed)) => {
                self.cursor += consumed;
                Some(Ok(DecodedPose {
                    offset,
                    tag,
                    transform,
                    consumed,
                }))
            }
            Err(e) => {
                tracing::debug!("Pose stream stopped at offset {}: {}", offset, e);
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for PoseStream<'_> {}

/// Decode every pose in `bytes`
pub fn decode_stream(bytes: &[u8], codec: PoseCodec) -> Result<Vec<RigidTransform>, PoseError> {
    PoseStream::with_codec(bytes, codec)
        .map(|r| r.map(|p| p.transform))
        .collect()
}

/// Per-kind record counts and byte totals for a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamStats {
    /// Records per tag, indexed by [`EncodingKind::tag`]
    pub counts: [usize; 4],
    /// Records with an undefined tag
    pub unknown: usize,
    /// Total bytes consumed
    pub total_bytes: usize,
}

impl StreamStats {
    /// Account for one decoded record
    pub fn record(&mut self, pose: &DecodedPose) {
        match pose.kind() {
            Some(kind) => self.counts[kind.tag() as usize] += 1,
            None => self.unknown += 1,
        }
        self.total_bytes += pose.consumed;
    }

    /// Records of `kind`
    pub fn count(&self, kind: EncodingKind) -> usize {
        self.counts[kind.tag() as usize]
    }

    /// Total record count
    pub fn records(&self) -> usize {
        self.counts.iter().sum::<usize>() + self.unknown
    }

    /// Average bytes per record, 0.0 for an empty stream
    pub fn average_size(&self) -> f32 {
        match self.records() {
            0 => 0.0,
            n => self.total_bytes as f32 / n as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat3, Vec3};
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    fn sample_poses() -> Vec<RigidTransform> {
        vec![
            RigidTransform::from_translation(Vec3::new(1.0, 2.0, 3.0)),
            RigidTransform::new(Vec3::ZERO, Mat3::from_rotation_x(FRAC_PI_2)),
            RigidTransform::new(Vec3::X, Mat3::from_rotation_y(FRAC_PI_4)),
            RigidTransform::from_euler_xyz(Vec3::NEG_ONE, 0.1, 0.2, 0.3),
        ]
    }

    #[test]
    fn test_stream_offsets() {
        let bytes = encode_stream(&sample_poses());
        assert_eq!(bytes.len(), 13 + 16 + 18 + 25);

        let offsets: Vec<usize> = PoseStream::new(&bytes).map(|r| r.unwrap().offset).collect();
        assert_eq!(offsets, vec![0, 13, 29, 47]);
    }

    #[test]
    fn test_stream_roundtrip() {
        let poses = sample_poses();
        let bytes = encode_stream(&poses);
        let decoded = decode_stream(&bytes, PoseCodec::default()).unwrap();
        assert_eq!(decoded.len(), poses.len());
        for (a, b) in poses.iter().zip(decoded.iter()) {
            assert!(a.max_abs_diff(b) < 1e-4);
        }
    }

    #[test]
    fn test_stream_stops_after_truncation() {
        let mut bytes = encode_stream(&sample_poses());
        bytes.truncate(bytes.len() - 1);

        let mut stream = PoseStream::new(&bytes);
        for _ in 0..3 {
            assert!(stream.next().unwrap().is_ok());
        }
        assert!(matches!(
            stream.next(),
            Some(Err(PoseError::Truncated { offset: 47, .. }))
        ));
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_stats() {
        let bytes = encode_stream(&sample_poses());
        let mut stats = StreamStats::default();
        for pose in PoseStream::new(&bytes) {
            stats.record(&pose.unwrap());
        }
        assert_eq!(stats.records(), 4);
        assert_eq!(stats.count(EncodingKind::AxisAligned), 1);
        assert_eq!(stats.count(EncodingKind::Euler), 1);
        assert_eq!(stats.unknown, 0);
        assert_eq!(stats.total_bytes, 72);
        assert_eq!(stats.average_size(), 18.0);
    }

    #[test]
    fn test_empty_stream() {
        assert!(PoseStream::new(&[]).next().is_none());
        assert_eq!(StreamStats::default().average_size(), 0.0);
    }
}
