//! Registry-facing codec trait.
//!
//! The replication layer keeps a registry of value codecs keyed by declared
//! type and only ever talks to them through [`WireCodec`]: read a value at a
//! cursor and report how many bytes it took, or append a value to a sink.
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use nether_pose::{PoseCodec, RigidTransform, WireCodec};
//!
//! let codec = PoseCodec::default();
//! let pose = RigidTransform::from_translation(Vec3::new(1.0, 2.0, 3.0));
//!
//! let mut bytes = Vec::new();
//! codec.write(&pose, &mut bytes);
//! assert_eq!(bytes.len(), 13);
//!
//! let (decoded, consumed) = codec.read(bytes.as_slice(), 0).unwrap();
//! assert_eq!(consumed, 13);
//! assert_eq!(decoded, pose);
//! ```

use crate::{
    ByteSink, ByteSource, CodecConfig, DecodeMode, PoseError, RigidTransform, decode_with_mode,
    encode,
};

/// A value codec the type registry can dispatch to.
pub trait WireCodec {
    /// Value type this codec handles
    type Value;

    /// Error reported by [`WireCodec::read`]
    type Error;

    /// Decode a value at `cursor`, returning it and the bytes consumed
    fn read<S: ByteSource + ?Sized>(
        &self,
        bytes: &S,
        cursor: usize,
    ) -> Result<(Self::Value, usize), Self::Error>;

    /// Append the encoding of `value` to `sink`
    fn write<W: ByteSink + ?Sized>(&self, value: &Self::Value, sink: &mut W);
}

/// [`WireCodec`] for [`RigidTransform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoseCodec {
    config: CodecConfig,
}

impl PoseCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Codec that reports malformed discriminators as errors
    pub fn strict() -> Self {
        Self::new(CodecConfig::strict())
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn decode_mode(&self) -> DecodeMode {
        self.config.decode.mode
    }
}

impl WireCodec for PoseCodec {
    type Value = RigidTransform;
    type Error = PoseError;

    fn read<S: ByteSource + ?Sized>(
        &self,
        bytes: &S,
        cursor: usize,
    ) -> Result<(RigidTransform, usize), PoseError> {
        decode_with_mode(bytes, cursor, self.decode_mode())
    }

    fn write<W: ByteSink + ?Sized>(&self, value: &RigidTransform, sink: &mut W) {
        encode(value, sink);
    }
}
