#![forbid(unsafe_code)]

pub mod calendar;
pub mod vm;

pub use vm::{ActivityVm, OnboardingVm, ViewError};
