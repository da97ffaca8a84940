use journey_core::model::{Cadence, DayLogState};
use journey_core::time::fixed_clock;
use services::JourneyService;
use ui::OnboardingVm;
use ui::calendar::{DayAppearance, DayFormatter, Swatch};

#[test]
fn onboarding_hands_a_fresh_journey_to_activity() {
    let mut onboarding = OnboardingVm::new();
    onboarding.set_topic("  Swift  ");
    onboarding.select_cadence(Cadence::Month);
    assert!(onboarding.can_start());

    let mut activity = onboarding
        .start(JourneyService::new(fixed_clock()))
        .unwrap();
    assert_eq!(activity.title(), "Learning Swift");
    assert_eq!(activity.state(), DayLogState::Unlogged);

    activity.tap_log_freezed().unwrap();
    assert!(activity.tap_log_freezed().is_none());
    let snapshot = activity.snapshot();
    assert_eq!(snapshot.state, DayLogState::Freezed);
    assert_eq!(snapshot.freezes_left, 0);
    assert_eq!(snapshot.cadence, Cadence::Month);
}

struct LoggedToday(DayLogState);

impl DayFormatter for LoggedToday {
    fn appearance(&self, day: &journey_core::model::CalendarDay) -> DayAppearance {
        match (day.is_today(), self.0) {
            (true, DayLogState::Freezed) => DayAppearance::filled(Swatch::Blue, 1.0),
            (true, _) => DayAppearance::filled(Swatch::Orange, 1.0),
            (false, _) => DayAppearance::filled(Swatch::DarkChocolate, 0.0),
        }
    }
}

#[test]
fn custom_formatter_sees_log_state() {
    let mut onboarding = OnboardingVm::new();
    onboarding.set_topic("Rust");
    let mut activity = onboarding
        .start(JourneyService::new(fixed_clock()))
        .unwrap();
    activity.tap_log_freezed().unwrap();

    let strip = activity.week_strip_with(LoggedToday(activity.state()));
    let blue: Vec<u32> = strip
        .cells()
        .iter()
        .filter(|cell| cell.appearance.fill == Swatch::Blue)
        .map(|cell| cell.number)
        .collect();
    assert_eq!(blue, vec![23]);
}
