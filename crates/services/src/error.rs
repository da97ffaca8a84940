//! Shared error types for the services crate.

use thiserror::Error;

use journey_core::model::{GoalError, LogError};

/// Errors emitted by `JourneyService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum JourneyError {
    #[error(transparent)]
    Goal(#[from] GoalError),
    #[error(transparent)]
    Log(#[from] LogError),
    #[error("snapshot could not be encoded: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for JourneyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode(err.to_string())
    }
}
