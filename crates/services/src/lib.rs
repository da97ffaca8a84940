#![forbid(unsafe_code)]

pub mod error;
pub mod journey;

pub use journey_core::Clock;

pub use error::JourneyError;
pub use journey::{Journey, JourneyService, JourneySnapshot, LogAction, LogOutcome};
