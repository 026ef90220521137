//! Error types for boxfit.

use thiserror::Error;

/// Result type alias for boxfit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the opt-in validation surfaces.
///
/// The fit pipeline itself never fails; these only come out of
/// [`Dimension::validate`](crate::Dimension::validate), the validated
/// setters on [`FitState`](crate::FitState) and [`Config::validate`](crate::Config::validate).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A dimension field was zero, negative or not finite.
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
