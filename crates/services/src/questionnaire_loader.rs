use std::path::Path;

use serde::Deserialize;

use intake_core::model::Questionnaire;

use crate::error::QuestionnaireLoadError;

/// Accepted file shapes: a bare array of prompts, or an object with a
/// `questions` array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum QuestionnaireFile {
    Prompts(Vec<String>),
    Wrapped { questions: Vec<String> },
}

impl QuestionnaireFile {
    fn into_prompts(self) -> Vec<String> {
        match self {
            Self::Prompts(prompts) | Self::Wrapped { questions: prompts } => prompts,
        }
    }
}

/// Parse a questionnaire from JSON text.
///
/// # Errors
///
/// Returns `QuestionnaireLoadError::Json` for malformed input and
/// `QuestionnaireLoadError::Questionnaire` for empty lists or blank prompts.
pub fn parse_questionnaire(raw: &str) -> Result<Questionnaire, QuestionnaireLoadError> {
    let file: QuestionnaireFile = serde_json::from_str(raw)?;
    let questionnaire = Questionnaire::from_prompts(file.into_prompts())?;
    tracing::debug!(questions = questionnaire.len(), "parsed questionnaire");
    Ok(questionnaire)
}

/// Read and parse a questionnaire file.
///
/// # Errors
///
/// Returns `QuestionnaireLoadError::Io` when the file cannot be read, otherwise
/// the errors of [`parse_questionnaire`].
pub fn load_questionnaire(path: &Path) -> Result<Questionnaire, QuestionnaireLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| QuestionnaireLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let questionnaire = parse_questionnaire(&raw)?;
    tracing::info!(path = %path.display(), questions = questionnaire.len(), "loaded questionnaire");
    Ok(questionnaire)
}
