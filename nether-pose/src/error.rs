//! Error types

/// Error returned when decoding a pose.
///
/// Only [`PoseError::Truncated`] can occur in the default permissive mode.
/// `UnknownTag` and `InvalidAxis` are reported in strict mode; permissive
/// decoding degrades those cases to a translation-only transform instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PoseError {
    #[error("truncated pose at offset {offset}: need {needed} bytes, {available} available")]
    Truncated {
        /// Cursor the decode started at
        offset: usize,
        /// Bytes the encoding requires from `offset`
        needed: usize,
        /// Bytes actually available from `offset`
        available: usize,
    },

    #[error("malformed pose: unknown encoding tag {0}")]
    UnknownTag(u8),

    #[error("malformed pose: invalid rotation axis id {0}")]
    InvalidAxis(u8),
}

impl PoseError {
    /// Whether this is one of the malformed-discriminator cases
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::UnknownTag(_) | Self::InvalidAxis(_))
    }
}

/// Error returned when loading a [`CodecConfig`](crate::CodecConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
