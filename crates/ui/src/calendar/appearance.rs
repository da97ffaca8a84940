use serde::Serialize;

/// Named colours from the app palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Swatch {
    Orange,
    Blue,
    Gray,
    DarkChocolate,
    White,
}

/// Display attributes for one calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayAppearance {
    pub fill: Swatch,
    pub fill_opacity: f32,
    /// Outline drawn around the cell, used to mark today.
    pub ring: bool,
    pub title: Swatch,
}

impl DayAppearance {
    #[must_use]
    pub fn filled(fill: Swatch, fill_opacity: f32) -> Self {
        Self {
            fill,
            fill_opacity,
            ring: false,
            title: Swatch::White,
        }
    }

    #[must_use]
    pub fn with_ring(mut self) -> Self {
        self.ring = true;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: Swatch) -> Self {
        self.title = title;
        self
    }
}
