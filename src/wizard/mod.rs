//! Generic onboarding wizard
//!
//! One engine walks an ordered list of step descriptors and owns the
//! accumulated draft; the creator and business flows are two catalogs
//! over the same machinery.

pub mod engine;
pub mod step;

pub use engine::{Progress, Wizard};
pub use step::{Audience, StepDescriptor, StepId, BUSINESS_STEPS, CREATOR_STEPS};
