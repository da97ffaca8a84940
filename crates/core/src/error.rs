use thiserror::Error;

use crate::model::{GoalError, LogError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Goal(#[from] GoalError),
    #[error(transparent)]
    Log(#[from] LogError),
}
