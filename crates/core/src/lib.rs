#![forbid(unsafe_code)]

pub mod model;
pub mod stepper;

pub use stepper::{QuestionStepper, Stage, StepOutcome};
