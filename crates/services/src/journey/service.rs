use tracing::{debug, info};

use journey_core::model::{Cadence, DailyLogTracker, DayLogState, LearningGoal};

use super::model::Journey;
use super::snapshot::JourneySnapshot;
use crate::Clock;
use crate::error::JourneyError;

/// The two actions a learner can take on a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogAction {
    Learned,
    Freezed,
}

impl LogAction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LogAction::Learned => "learned",
            LogAction::Freezed => "freezed",
        }
    }
}

/// Counters after an accepted log action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOutcome {
    pub action: LogAction,
    pub state: DayLogState,
    pub days_learned: u32,
    pub freezes_left: u32,
}

/// Starts journeys and applies the day's log actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct JourneyService {
    clock: Clock,
}

impl JourneyService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Validate onboarding input and start a fresh journey today.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::Goal` if the topic is blank or too long.
    pub fn start_journey(&self, topic: &str, cadence: Cadence) -> Result<Journey, JourneyError> {
        let goal = LearningGoal::new(topic, cadence)?;
        let started_on = self.clock.today();
        info!(topic = goal.topic(), cadence = %cadence, %started_on, "journey started");
        Ok(Journey::new(goal, DailyLogTracker::new(), started_on))
    }

    /// Log today as learned.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::Log` if today is already logged. The journey is unchanged.
    pub fn log_learned(&self, journey: &mut Journey) -> Result<LogOutcome, JourneyError> {
        self.apply(journey, LogAction::Learned)
    }

    /// Spend a freeze on today.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::Log` if no freezes are left or today is already logged.
    /// The journey is unchanged.
    pub fn log_freezed(&self, journey: &mut Journey) -> Result<LogOutcome, JourneyError> {
        self.apply(journey, LogAction::Freezed)
    }

    /// Replace the topic and cadence, keeping progress and today's state.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::Goal` if validation fails. The journey is unchanged.
    pub fn update_goal(
        &self,
        journey: &mut Journey,
        topic: &str,
        cadence: Cadence,
    ) -> Result<(), JourneyError> {
        let goal = LearningGoal::new(topic, cadence)?;
        info!(
            from = journey.goal().topic(),
            to = goal.topic(),
            cadence = %cadence,
            "goal updated"
        );
        journey.replace_goal(goal);
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self, journey: &Journey) -> JourneySnapshot {
        JourneySnapshot::capture(journey, self.clock.today())
    }

    fn apply(
        &self,
        journey: &mut Journey,
        action: LogAction,
    ) -> Result<LogOutcome, JourneyError> {
        let topic = journey.goal().topic().to_owned();
        let tracker = journey.tracker_mut();
        let result = match action {
            LogAction::Learned => tracker.log_as_learned(),
            LogAction::Freezed => tracker.log_as_freezed(),
        };

        if let Err(err) = result {
            debug!(
                %topic,
                action = action.as_str(),
                state = %tracker.state(),
                freezes_left = tracker.freezes_left(),
                reason = %err,
                "log action ignored"
            );
            return Err(err.into());
        }

        let outcome = LogOutcome {
            action,
            state: tracker.state(),
            days_learned: tracker.days_learned(),
            freezes_left: tracker.freezes_left(),
        };
        info!(
            %topic,
            action = action.as_str(),
            days_learned = outcome.days_learned,
            freezes_left = outcome.freezes_left,
            "day logged"
        );
        Ok(outcome)
    }
}
