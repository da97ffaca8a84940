use chrono::NaiveDate;
use serde::Serialize;

use journey_core::model::CalendarDay;
use journey_core::model::calendar::{
    WEEKDAY_LABELS, leading_blanks, month_of, month_title, week_of,
};

use super::appearance::DayAppearance;
use super::formatter::DayFormatter;

/// A calendar cell with its formatting applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayCell {
    pub day: CalendarDay,
    pub weekday: &'static str,
    pub number: u32,
    pub appearance: DayAppearance,
}

impl DayCell {
    fn format<F: DayFormatter>(day: CalendarDay, formatter: &F) -> Self {
        Self {
            weekday: day.weekday_label(),
            number: day.day_of_month(),
            appearance: formatter.appearance(&day),
            day,
        }
    }
}

/// The seven-day strip above the counters on the activity screen.
#[derive(Debug, Clone)]
pub struct CalendarStrip<F> {
    today: NaiveDate,
    formatter: F,
}

impl<F: DayFormatter> CalendarStrip<F> {
    #[must_use]
    pub fn new(today: NaiveDate, formatter: F) -> Self {
        Self { today, formatter }
    }

    #[must_use]
    pub fn title(&self) -> String {
        month_title(self.today)
    }

    #[must_use]
    pub fn weekday_labels(&self) -> [&'static str; 7] {
        WEEKDAY_LABELS
    }

    #[must_use]
    pub fn cells(&self) -> Vec<DayCell> {
        week_of(self.today)
            .into_iter()
            .map(|day| DayCell::format(day, &self.formatter))
            .collect()
    }
}

/// One month of the "All activities" page.
#[derive(Debug, Clone)]
pub struct MonthGrid<F> {
    anchor: NaiveDate,
    today: NaiveDate,
    formatter: F,
}

impl<F: DayFormatter> MonthGrid<F> {
    #[must_use]
    pub fn new(anchor: NaiveDate, today: NaiveDate, formatter: F) -> Self {
        Self {
            anchor,
            today,
            formatter,
        }
    }

    #[must_use]
    pub fn title(&self) -> String {
        month_title(self.anchor)
    }

    /// Blank cells before day 1 so the grid lines up under `SUN..SAT`.
    #[must_use]
    pub fn leading_blanks(&self) -> u32 {
        leading_blanks(self.anchor)
    }

    #[must_use]
    pub fn cells(&self) -> Vec<DayCell> {
        month_of(self.anchor, self.today)
            .into_iter()
            .map(|day| DayCell::format(day, &self.formatter))
            .collect()
    }

    #[must_use]
    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    pub fn formatter_mut(&mut self) -> &mut F {
        &mut self.formatter
    }
}
