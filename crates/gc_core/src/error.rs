use thiserror::Error;

use crate::features::ModelKind;

#[derive(Error, Debug)]
pub enum CoachError {
    #[error("model not loaded: {0}")]
    ModelUnavailable(ModelKind),

    #[error("unsupported play action: {0}")]
    UnsupportedAction(String),

    #[error("invalid game state: {0}")]
    InvalidGameState(String),

    #[error("calibration artifact error: {0}")]
    Calibration(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoachError {
    /// Whether a combined decision call may simply skip this error and
    /// continue with the remaining decision kinds.
    pub fn is_skippable(&self) -> bool {
        matches!(self, CoachError::ModelUnavailable(_))
    }
}

pub type Result<T> = std::result::Result<T, CoachError>;
