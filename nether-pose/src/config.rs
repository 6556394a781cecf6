//! Codec configuration
//!
//! Loaded from TOML, every field optional:
//!
//! ```toml
//! [decode]
//! mode = "strict"   # default: "permissive"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ConfigError;

/// How the decoder treats malformed discriminator bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Unknown tags and invalid axis ids decode as translation only.
    /// Wire-compatible with existing peers.
    #[default]
    Permissive,
    /// Unknown tags and invalid axis ids are reported as errors
    Strict,
}

/// Decoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DecodeConfig {
    /// Malformed input handling (default: permissive)
    #[serde(default)]
    pub mode: DecodeMode,
}

/// Pose codec configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CodecConfig {
    /// Decoder settings
    #[serde(default)]
    pub decode: DecodeConfig,
}

impl CodecConfig {
    /// Strict decoding, everything else default
    pub fn strict() -> Self {
        Self {
            decode: DecodeConfig {
                mode: DecodeMode::Strict,
            },
        }
    }

    /// Parse from a TOML string
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded codec config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
