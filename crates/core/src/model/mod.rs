mod ids;
mod patient;
mod question;
mod table;
mod version;

pub use ids::QuestionId;
pub use patient::{PatientField, PatientForm, PatientRecord};
pub use question::{Question, Questionnaire, QuestionnaireError};
pub use table::{PatientTable, TableRow};
pub use version::{Version, VersionError};
