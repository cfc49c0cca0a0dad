//! Error type for carousel configuration.

use thiserror::Error;

/// Errors raised while building or reconfiguring a carousel.
///
/// Configuration problems are programmer errors and surface once, at
/// construction time. Runtime input (page jumps, gestures, resizes) never
/// errors; out-of-range values are clamped in place instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The configuration would produce an unusable layout, e.g. an
    /// items-per-page count of zero. Contains a description of the cause.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
