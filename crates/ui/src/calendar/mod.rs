//! Calendar components driven by formatting callbacks.

mod appearance;
mod formatter;
mod grid;

pub use appearance::{DayAppearance, Swatch};
pub use formatter::{DayFormatter, SelectionFormatter, StreakFormatter};
pub use grid::{CalendarStrip, DayCell, MonthGrid};
