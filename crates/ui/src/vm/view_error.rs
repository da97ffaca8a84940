use journey_core::model::GoalError;
use services::JourneyError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    InvalidTopic(GoalError),
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ViewError::InvalidTopic(err) => err.to_string(),
            ViewError::Unknown => "Something went wrong. Please try again.".to_owned(),
        }
    }
}

impl From<JourneyError> for ViewError {
    fn from(err: JourneyError) -> Self {
        match err {
            JourneyError::Goal(goal) => ViewError::InvalidTopic(goal),
            _ => ViewError::Unknown,
        }
    }
}
