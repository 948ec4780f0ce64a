//! Error types
//!
//! The integration loop itself never fails: extreme magnitudes and NaN are
//! simulated as-is. Only spawn-time mass and start-of-run configuration are
//! validated.

use thiserror::Error;

/// Rejected spawn: every body needs a strictly positive mass
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("body mass must be positive, got {mass}")]
pub struct InvalidMassError {
    pub mass: f32,
}

/// Problems loading or validating a [`crate::SimConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
