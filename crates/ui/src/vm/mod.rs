mod activity_vm;
mod onboarding_vm;
mod view_error;

pub use activity_vm::{ActivityVm, MainCircle};
pub use onboarding_vm::{OnboardingVm, TOPIC_PLACEHOLDER};
pub use view_error::ViewError;
