//! Construction-time errors. The per-frame path never returns these.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LanternError {
    /// Remap image could not be parsed into a palette ramp
    #[error("malformed remap image at row {row}: {reason}")]
    MalformedRamp { row: usize, reason: String },

    /// A configuration value is out of range
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to read config {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ParseConfig(#[from] toml::de::Error),
}
