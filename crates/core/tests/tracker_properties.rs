use journey_core::model::{DailyLogTracker, DayLogState, LearningProgress, LogError};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Action {
    Learned,
    Freezed,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![Just(Action::Learned), Just(Action::Freezed)]
}

fn apply(tracker: &mut DailyLogTracker, action: Action) -> Result<(), LogError> {
    match action {
        Action::Learned => tracker.log_as_learned(),
        Action::Freezed => tracker.log_as_freezed(),
    }
}

proptest! {
    #[test]
    fn at_most_one_action_is_accepted_per_day(
        days_learned in 0_u32..1_000,
        freezes_left in 0_u32..4,
        actions in prop::collection::vec(action(), 0..12),
    ) {
        let mut tracker =
            DailyLogTracker::with_progress(LearningProgress::new(days_learned, freezes_left));
        let mut accepted = 0;
        let mut previous_days = tracker.days_learned();

        for action in actions {
            let before = tracker;
            match apply(&mut tracker, action) {
                Ok(()) => accepted += 1,
                Err(_) => prop_assert_eq!(tracker, before),
            }
            prop_assert!(tracker.days_learned() >= previous_days);
            previous_days = tracker.days_learned();
        }

        prop_assert!(accepted <= 1);
        prop_assert!(tracker.days_learned() <= days_learned + 1);
        prop_assert!(tracker.freezes_left() >= freezes_left.saturating_sub(1));
    }

    #[test]
    fn freeze_is_always_refused_without_tokens(
        days_learned in 0_u32..1_000,
        learn_first in any::<bool>(),
    ) {
        let mut tracker = DailyLogTracker::with_progress(LearningProgress::new(days_learned, 0));
        if learn_first {
            tracker.log_as_learned().unwrap();
        }
        let before = tracker;

        prop_assert_eq!(tracker.log_as_freezed(), Err(LogError::NoFreezesLeft));
        prop_assert_eq!(tracker, before);
        prop_assert_ne!(tracker.state(), DayLogState::Freezed);
    }
}

#[test]
fn learned_scenario_locks_the_day() {
    let mut tracker = DailyLogTracker::new();
    tracker.log_as_learned().unwrap();
    assert!(tracker.log_as_freezed().is_err());

    assert_eq!(tracker.state(), DayLogState::Learned);
    assert_eq!(tracker.days_learned(), 1);
    assert_eq!(tracker.freezes_left(), 1);
}

#[test]
fn freezed_scenario_spends_the_only_token() {
    let mut tracker = DailyLogTracker::new();
    tracker.log_as_freezed().unwrap();
    assert!(tracker.log_as_freezed().is_err());

    assert_eq!(tracker.state(), DayLogState::Freezed);
    assert_eq!(tracker.days_learned(), 0);
    assert_eq!(tracker.freezes_left(), 0);
}
