//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use intake_core::model::QuestionnaireError;

/// Errors emitted while loading a questionnaire file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionnaireLoadError {
    #[error("failed to read questionnaire file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("questionnaire file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Questionnaire(#[from] QuestionnaireError),
}
