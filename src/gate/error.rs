use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum GateError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("identifier/score length mismatch: {ids} identifiers, {scores} scores")]
    LengthMismatch { ids: usize, scores: usize },
}
