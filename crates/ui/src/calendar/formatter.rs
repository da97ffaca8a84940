use chrono::NaiveDate;

use journey_core::model::{CalendarDay, DayRelation};

use super::appearance::{DayAppearance, Swatch};

/// Maps a calendar day to how it should look.
pub trait DayFormatter {
    fn appearance(&self, day: &CalendarDay) -> DayAppearance;
}

impl<F> DayFormatter for F
where
    F: Fn(&CalendarDay) -> DayAppearance,
{
    fn appearance(&self, day: &CalendarDay) -> DayAppearance {
        self(day)
    }
}

/// Week strip colouring: past days faded orange, today bright and ringed.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreakFormatter;

impl DayFormatter for StreakFormatter {
    fn appearance(&self, day: &CalendarDay) -> DayAppearance {
        match day.relation {
            DayRelation::Today => DayAppearance::filled(Swatch::Orange, 0.9).with_ring(),
            DayRelation::Past => DayAppearance::filled(Swatch::Orange, 0.4),
            DayRelation::Future => DayAppearance::filled(Swatch::Gray, 0.5),
        }
    }
}

/// Month page colouring: the selected date in orange, everything else dark.
#[derive(Debug, Clone, Copy)]
pub struct SelectionFormatter {
    selected: NaiveDate,
}

impl SelectionFormatter {
    #[must_use]
    pub fn new(selected: NaiveDate) -> Self {
        Self { selected }
    }

    #[must_use]
    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected = date;
    }
}

impl DayFormatter for SelectionFormatter {
    fn appearance(&self, day: &CalendarDay) -> DayAppearance {
        if day.date == self.selected {
            DayAppearance::filled(Swatch::Orange, 1.0)
        } else {
            DayAppearance::filled(Swatch::DarkChocolate, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32, today: u32) -> CalendarDay {
        CalendarDay::new(
            NaiveDate::from_ymd_opt(2025, 10, d).unwrap(),
            NaiveDate::from_ymd_opt(2025, 10, today).unwrap(),
        )
    }

    #[test]
    fn streak_formatter_rings_only_today() {
        let today = StreakFormatter.appearance(&day(23, 23));
        assert_eq!(today.fill, Swatch::Orange);
        assert!(today.ring);
        assert!((today.fill_opacity - 0.9).abs() < f32::EPSILON);

        let past = StreakFormatter.appearance(&day(20, 23));
        assert!(!past.ring);
        assert!((past.fill_opacity - 0.4).abs() < f32::EPSILON);

        assert_eq!(StreakFormatter.appearance(&day(25, 23)).fill, Swatch::Gray);
    }

    #[test]
    fn selection_formatter_follows_selection() {
        let mut formatter = SelectionFormatter::new(NaiveDate::from_ymd_opt(2025, 10, 27).unwrap());
        assert_eq!(formatter.appearance(&day(27, 23)).fill, Swatch::Orange);
        assert_eq!(formatter.appearance(&day(26, 23)).fill, Swatch::DarkChocolate);

        formatter.select(NaiveDate::from_ymd_opt(2025, 10, 26).unwrap());
        assert_eq!(formatter.appearance(&day(26, 23)).fill, Swatch::Orange);
        assert_eq!(formatter.appearance(&day(26, 23)).title, Swatch::White);
    }

    #[test]
    fn closures_are_formatters() {
        let formatter = |_: &CalendarDay| DayAppearance::filled(Swatch::Blue, 0.3);
        assert_eq!(formatter.appearance(&day(1, 1)).fill, Swatch::Blue);
    }
}
