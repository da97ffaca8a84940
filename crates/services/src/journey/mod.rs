mod model;
mod service;
mod snapshot;

// Public API of the journey subsystem.
pub use crate::error::JourneyError;
pub use model::Journey;
pub use service::{JourneyService, LogAction, LogOutcome};
pub use snapshot::JourneySnapshot;
