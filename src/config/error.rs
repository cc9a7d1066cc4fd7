//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An integer setting could not be parsed.
    #[error("failed to parse {name}='{value}' as an integer: {source}")]
    InvalidInteger {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A float setting could not be parsed.
    #[error("failed to parse {name}='{value}' as a number: {source}")]
    InvalidFloat {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Floor policy string was not one of the known policies.
    #[error("unknown floor policy '{value}': expected 'inert' or 'enforced'")]
    InvalidFloorPolicy { value: String },

    /// A float setting was NaN or infinite.
    ///
    /// This is the only validation applied to thresholds. Out-of-range but finite values
    /// (negative floors, biases above 1.0) are accepted and processed as-is.
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
}
