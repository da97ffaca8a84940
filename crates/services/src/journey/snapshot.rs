use chrono::NaiveDate;
use serde::Serialize;

use journey_core::model::{Cadence, DayLogState};

use super::model::Journey;
use crate::error::JourneyError;

/// Read-only view of a journey for status output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneySnapshot {
    pub topic: String,
    pub cadence: Cadence,
    pub title: String,
    pub started_on: NaiveDate,
    pub today: NaiveDate,
    pub state: DayLogState,
    pub days_learned: u32,
    pub freezes_left: u32,
    pub can_log_learned: bool,
    pub can_log_freezed: bool,
}

impl JourneySnapshot {
    #[must_use]
    pub fn capture(journey: &Journey, today: NaiveDate) -> Self {
        let goal = journey.goal();
        let tracker = journey.tracker();
        Self {
            topic: goal.topic().to_owned(),
            cadence: goal.cadence(),
            title: goal.title(),
            started_on: journey.started_on(),
            today,
            state: tracker.state(),
            days_learned: tracker.days_learned(),
            freezes_left: tracker.freezes_left(),
            can_log_learned: tracker.can_log_learned(),
            can_log_freezed: tracker.can_log_freezed(),
        }
    }

    /// # Errors
    ///
    /// Returns `JourneyError::Encode` if serialization fails.
    pub fn to_json(&self) -> Result<String, JourneyError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
