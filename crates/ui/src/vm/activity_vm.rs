use chrono::NaiveDate;

use journey_core::model::{Cadence, DayLogState};
use services::{Journey, JourneyService, JourneySnapshot, LogOutcome};

use crate::calendar::{
    CalendarStrip, DayFormatter, MonthGrid, SelectionFormatter, StreakFormatter, Swatch,
};
use crate::vm::view_error::ViewError;

/// Fill of the large log button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MainCircle {
    pub fill: Swatch,
    pub opacity: f32,
}

/// The "Activity" screen: calendar strip, counters, and the two log buttons.
#[derive(Debug)]
pub struct ActivityVm {
    service: JourneyService,
    journey: Journey,
}

impl ActivityVm {
    #[must_use]
    pub fn new(service: JourneyService, journey: Journey) -> Self {
        Self { service, journey }
    }

    #[must_use]
    pub fn journey(&self) -> &Journey {
        &self.journey
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.journey.goal().title()
    }

    #[must_use]
    pub fn state(&self) -> DayLogState {
        self.journey.tracker().state()
    }

    #[must_use]
    pub fn is_day_logged(&self) -> bool {
        self.journey.tracker().is_day_logged()
    }

    #[must_use]
    pub fn is_freeze_disabled(&self) -> bool {
        !self.journey.tracker().can_log_freezed()
    }

    #[must_use]
    pub fn main_button_label(&self) -> &'static str {
        match self.state() {
            DayLogState::Unlogged => "Log as\nLearned",
            DayLogState::Learned => "Learned\nToday",
            DayLogState::Freezed => "Day\nFreezed",
        }
    }

    #[must_use]
    pub fn main_circle(&self) -> MainCircle {
        match self.state() {
            DayLogState::Unlogged => MainCircle {
                fill: Swatch::Orange,
                opacity: 1.0,
            },
            DayLogState::Learned => MainCircle {
                fill: Swatch::Orange,
                opacity: 0.6,
            },
            DayLogState::Freezed => MainCircle {
                fill: Swatch::Blue,
                opacity: 1.0,
            },
        }
    }

    #[must_use]
    pub fn learned_text(&self) -> String {
        match self.journey.tracker().days_learned() {
            1 => "1 Day Learned".to_owned(),
            n => format!("{n} Days Learned"),
        }
    }

    #[must_use]
    pub fn freeze_text(&self) -> String {
        match self.journey.tracker().freezes_left() {
            1 => "1 Day Freezed".to_owned(),
            n => format!("{n} Days Freezed"),
        }
    }

    /// Big circle pressed. Ignored once the day is logged.
    pub fn tap_log_learned(&mut self) -> Option<LogOutcome> {
        self.service.log_learned(&mut self.journey).ok()
    }

    /// "Log as Freezed" pressed. Ignored while the button is disabled.
    pub fn tap_log_freezed(&mut self) -> Option<LogOutcome> {
        self.service.log_freezed(&mut self.journey).ok()
    }

    /// Goal editor save.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::InvalidTopic` when the new topic does not validate.
    pub fn edit_goal(&mut self, topic: &str, cadence: Cadence) -> Result<(), ViewError> {
        self.service.update_goal(&mut self.journey, topic, cadence)?;
        Ok(())
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.service.clock().today()
    }

    #[must_use]
    pub fn week_strip(&self) -> CalendarStrip<StreakFormatter> {
        self.week_strip_with(StreakFormatter)
    }

    #[must_use]
    pub fn week_strip_with<F: DayFormatter>(&self, formatter: F) -> CalendarStrip<F> {
        CalendarStrip::new(self.today(), formatter)
    }

    /// Month page opened from the toolbar, with `selected` highlighted.
    #[must_use]
    pub fn month_grid(&self, selected: NaiveDate) -> MonthGrid<SelectionFormatter> {
        MonthGrid::new(selected, self.today(), SelectionFormatter::new(selected))
    }

    #[must_use]
    pub fn snapshot(&self) -> JourneySnapshot {
        self.service.snapshot(&self.journey)
    }
}
