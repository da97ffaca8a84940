use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

/// Weekday column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Where a day sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayRelation {
    Past,
    Today,
    Future,
}

impl DayRelation {
    #[must_use]
    pub fn of(date: NaiveDate, today: NaiveDate) -> Self {
        match date.cmp(&today) {
            std::cmp::Ordering::Less => DayRelation::Past,
            std::cmp::Ordering::Equal => DayRelation::Today,
            std::cmp::Ordering::Greater => DayRelation::Future,
        }
    }
}

/// A single cell of a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub relation: DayRelation,
}

impl CalendarDay {
    #[must_use]
    pub fn new(date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            date,
            relation: DayRelation::of(date, today),
        }
    }

    #[must_use]
    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }

    #[must_use]
    pub fn is_today(&self) -> bool {
        self.relation == DayRelation::Today
    }

    #[must_use]
    pub fn weekday_label(&self) -> &'static str {
        weekday_label(self.date.weekday())
    }
}

#[must_use]
pub fn weekday_label(weekday: Weekday) -> &'static str {
    WEEKDAY_LABELS[weekday.num_days_from_sunday() as usize]
}

/// Header text such as "October 2025".
#[must_use]
pub fn month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// The Sunday-started week containing `today`.
#[must_use]
pub fn week_of(today: NaiveDate) -> Vec<CalendarDay> {
    let offset = u64::from(today.weekday().num_days_from_sunday());
    let Some(sunday) = today.checked_sub_days(Days::new(offset)) else {
        return Vec::new();
    };
    sunday
        .iter_days()
        .take(7)
        .map(|date| CalendarDay::new(date, today))
        .collect()
}

/// Every day of the month containing `anchor`, with no days borrowed from
/// neighbouring months.
#[must_use]
pub fn month_of(anchor: NaiveDate, today: NaiveDate) -> Vec<CalendarDay> {
    let Some(first) = anchor.with_day(1) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|date| date.month() == first.month())
        .map(|date| CalendarDay::new(date, today))
        .collect()
}

/// Empty cells before the first of the month in a Sunday-started grid.
#[must_use]
pub fn leading_blanks(anchor: NaiveDate) -> u32 {
    anchor
        .with_day(1)
        .map_or(0, |first| first.weekday().num_days_from_sunday())
}
