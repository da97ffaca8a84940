use chrono::NaiveDate;

use journey_core::model::{DailyLogTracker, LearningGoal};

/// A started learning journey: the goal plus today's tracker.
///
/// Owned by whichever screen displays it. Nothing outlives the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    goal: LearningGoal,
    tracker: DailyLogTracker,
    started_on: NaiveDate,
}

impl Journey {
    #[must_use]
    pub fn new(goal: LearningGoal, tracker: DailyLogTracker, started_on: NaiveDate) -> Self {
        Self {
            goal,
            tracker,
            started_on,
        }
    }

    #[must_use]
    pub fn goal(&self) -> &LearningGoal {
        &self.goal
    }

    #[must_use]
    pub fn tracker(&self) -> &DailyLogTracker {
        &self.tracker
    }

    #[must_use]
    pub fn started_on(&self) -> NaiveDate {
        self.started_on
    }

    pub(crate) fn tracker_mut(&mut self) -> &mut DailyLogTracker {
        &mut self.tracker
    }

    pub(crate) fn replace_goal(&mut self, goal: LearningGoal) {
        self.goal = goal;
    }
}
