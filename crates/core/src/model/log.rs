use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Freeze tokens granted to a freshly started journey.
pub const DEFAULT_FREEZES: u32 = 1;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Reasons a log action was refused. A refused action never mutates the tracker.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum LogError {
    #[error("today is already logged as {0}")]
    AlreadyLogged(DayLogState),

    #[error("no freezes left")]
    NoFreezesLeft,
}

//
// ─── DAY STATE ────────────────────────────────────────────────────────────────
//

/// Logging status of the current calendar day.
///
/// `Unlogged` is the only state with outgoing transitions; `Learned` and
/// `Freezed` lock the day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayLogState {
    #[default]
    Unlogged,
    Learned,
    Freezed,
}

impl DayLogState {
    #[must_use]
    pub fn is_logged(self) -> bool {
        !matches!(self, DayLogState::Unlogged)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DayLogState::Unlogged => "unlogged",
            DayLogState::Learned => "learned",
            DayLogState::Freezed => "freezed",
        }
    }
}

impl std::fmt::Display for DayLogState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── PROGRESS ─────────────────────────────────────────────────────────────────
//

/// Cumulative counters shown next to the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningProgress {
    days_learned: u32,
    freezes_left: u32,
}

impl LearningProgress {
    #[must_use]
    pub fn new(days_learned: u32, freezes_left: u32) -> Self {
        Self {
            days_learned,
            freezes_left,
        }
    }

    #[must_use]
    pub fn days_learned(&self) -> u32 {
        self.days_learned
    }

    #[must_use]
    pub fn freezes_left(&self) -> u32 {
        self.freezes_left
    }
}

impl Default for LearningProgress {
    fn default() -> Self {
        Self::new(0, DEFAULT_FREEZES)
    }
}

//
// ─── TRACKER ──────────────────────────────────────────────────────────────────
//

/// Gates the day's single log action and keeps the counters consistent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLogTracker {
    state: DayLogState,
    progress: LearningProgress,
}

impl DailyLogTracker {
    /// Fresh tracker: unlogged, nothing learned, one freeze.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Unlogged tracker starting from existing counters.
    #[must_use]
    pub fn with_progress(progress: LearningProgress) -> Self {
        Self {
            state: DayLogState::Unlogged,
            progress,
        }
    }

    #[must_use]
    pub fn state(&self) -> DayLogState {
        self.state
    }

    #[must_use]
    pub fn progress(&self) -> LearningProgress {
        self.progress
    }

    #[must_use]
    pub fn days_learned(&self) -> u32 {
        self.progress.days_learned
    }

    #[must_use]
    pub fn freezes_left(&self) -> u32 {
        self.progress.freezes_left
    }

    #[must_use]
    pub fn is_day_logged(&self) -> bool {
        self.state.is_logged()
    }

    #[must_use]
    pub fn can_log_learned(&self) -> bool {
        !self.is_day_logged()
    }

    #[must_use]
    pub fn can_log_freezed(&self) -> bool {
        !self.is_day_logged() && self.progress.freezes_left > 0
    }

    /// Marks today as learned.
    ///
    /// # Errors
    ///
    /// Returns `LogError::AlreadyLogged` if today already left `Unlogged`.
    pub fn log_as_learned(&mut self) -> Result<(), LogError> {
        if self.is_day_logged() {
            return Err(LogError::AlreadyLogged(self.state));
        }
        self.state = DayLogState::Learned;
        self.progress.days_learned = self.progress.days_learned.saturating_add(1);
        Ok(())
    }

    /// Spends a freeze token on today.
    ///
    /// # Errors
    ///
    /// Returns `LogError::NoFreezesLeft` when the tokens are exhausted, otherwise
    /// `LogError::AlreadyLogged` if today already left `Unlogged`.
    pub fn log_as_freezed(&mut self) -> Result<(), LogError> {
        if self.progress.freezes_left == 0 {
            return Err(LogError::NoFreezesLeft);
        }
        if self.is_day_logged() {
            return Err(LogError::AlreadyLogged(self.state));
        }
        self.state = DayLogState::Freezed;
        self.progress.freezes_left -= 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(tracker: &DailyLogTracker) -> (DayLogState, u32, u32) {
        (
            tracker.state(),
            tracker.days_learned(),
            tracker.freezes_left(),
        )
    }

    #[test]
    fn fresh_tracker_has_one_freeze_and_nothing_learned() {
        let tracker = DailyLogTracker::new();
        assert_eq!(parts(&tracker), (DayLogState::Unlogged, 0, 1));
        assert!(tracker.can_log_learned());
        assert!(tracker.can_log_freezed());
    }

    #[test]
    fn learned_then_freeze_is_refused() {
        let mut tracker = DailyLogTracker::new();
        tracker.log_as_learned().unwrap();
        assert_eq!(parts(&tracker), (DayLogState::Learned, 1, 1));

        let err = tracker.log_as_freezed().unwrap_err();
        assert_eq!(err, LogError::AlreadyLogged(DayLogState::Learned));
        assert_eq!(parts(&tracker), (DayLogState::Learned, 1, 1));
    }

    #[test]
    fn learned_twice_is_a_no_op() {
        let mut tracker = DailyLogTracker::new();
        tracker.log_as_learned().unwrap();
        assert!(tracker.log_as_learned().is_err());
        assert_eq!(parts(&tracker), (DayLogState::Learned, 1, 1));
    }

    #[test]
    fn freeze_twice_reports_exhausted_tokens() {
        let mut tracker = DailyLogTracker::new();
        tracker.log_as_freezed().unwrap();
        assert_eq!(parts(&tracker), (DayLogState::Freezed, 0, 0));

        assert_eq!(tracker.log_as_freezed(), Err(LogError::NoFreezesLeft));
        assert_eq!(parts(&tracker), (DayLogState::Freezed, 0, 0));
    }

    #[test]
    fn freeze_without_tokens_is_refused_while_unlogged() {
        let mut tracker = DailyLogTracker::with_progress(LearningProgress::new(4, 0));
        assert!(!tracker.can_log_freezed());
        assert_eq!(tracker.log_as_freezed(), Err(LogError::NoFreezesLeft));
        assert_eq!(parts(&tracker), (DayLogState::Unlogged, 4, 0));

        tracker.log_as_learned().unwrap();
        assert_eq!(parts(&tracker), (DayLogState::Learned, 5, 0));
    }

    #[test]
    fn freezed_day_refuses_learned() {
        let mut tracker = DailyLogTracker::with_progress(LearningProgress::new(2, 3));
        tracker.log_as_freezed().unwrap();
        assert_eq!(
            tracker.log_as_learned(),
            Err(LogError::AlreadyLogged(DayLogState::Freezed))
        );
        assert_eq!(parts(&tracker), (DayLogState::Freezed, 2, 2));
    }

    #[test]
    fn state_displays_lowercase_name() {
        assert_eq!(DayLogState::Freezed.to_string(), "freezed");
        assert!(!DayLogState::Unlogged.is_logged());
    }
}
