pub mod calendar;
mod goal;
mod log;

pub use calendar::{CalendarDay, DayRelation};
pub use goal::{Cadence, GoalError, LearningGoal, MAX_TOPIC_CHARS};
pub use log::{DEFAULT_FREEZES, DailyLogTracker, DayLogState, LearningProgress, LogError};
