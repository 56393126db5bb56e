#![forbid(unsafe_code)]

pub mod error;
pub mod intake_service;
pub mod questionnaire_loader;

pub use error::QuestionnaireLoadError;
pub use intake_service::IntakeService;
pub use questionnaire_loader::{load_questionnaire, parse_questionnaire};
