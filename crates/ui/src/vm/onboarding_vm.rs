use journey_core::model::{Cadence, GoalError, LearningGoal};
use services::JourneyService;

use crate::vm::activity_vm::ActivityVm;
use crate::vm::view_error::ViewError;

/// Placeholder shown in the empty topic field.
pub const TOPIC_PLACEHOLDER: &str = "Enter topic (e.g. Swift)";

/// State of the "Hello Learner" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OnboardingVm {
    topic: String,
    cadence: Option<Cadence>,
}

impl OnboardingVm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    #[must_use]
    pub fn cadence_options(&self) -> [Cadence; 3] {
        Cadence::ALL
    }

    pub fn select_cadence(&mut self, cadence: Cadence) {
        self.cadence = Some(cadence);
    }

    #[must_use]
    pub fn is_selected(&self, cadence: Cadence) -> bool {
        self.cadence == Some(cadence)
    }

    /// The cadence a journey would start with; Week until one is picked.
    #[must_use]
    pub fn effective_cadence(&self) -> Cadence {
        self.cadence.unwrap_or_default()
    }

    /// Why the current topic would be refused, if it would be.
    #[must_use]
    pub fn topic_problem(&self) -> Option<GoalError> {
        LearningGoal::new(&self.topic, self.effective_cadence()).err()
    }

    #[must_use]
    pub fn can_start(&self) -> bool {
        self.topic_problem().is_none()
    }

    /// "Start learning": validates the form and opens the activity screen.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::InvalidTopic` when the topic does not validate.
    pub fn start(&self, service: JourneyService) -> Result<ActivityVm, ViewError> {
        let journey = service.start_journey(&self.topic, self.effective_cadence())?;
        Ok(ActivityVm::new(service, journey))
    }
}
