use thiserror::Error;

use crate::model::ids::QuestionId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionnaireError {
    #[error("questionnaire must contain at least one question")]
    Empty,

    #[error("question {index} has an empty prompt")]
    BlankPrompt { index: usize },
}

/// A single step of the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// Ordered, non-empty list of questions. A question's identity is its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    /// Build a questionnaire from prompts, in display order.
    ///
    /// # Errors
    ///
    /// Returns `QuestionnaireError::Empty` when no prompts are given.
    /// Returns `QuestionnaireError::BlankPrompt` when a prompt is only whitespace.
    pub fn from_prompts<I, S>(prompts: I) -> Result<Self, QuestionnaireError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let questions = prompts
            .into_iter()
            .enumerate()
            .map(|(index, prompt)| {
                let prompt = prompt.into();
                if prompt.trim().is_empty() {
                    return Err(QuestionnaireError::BlankPrompt { index });
                }
                Ok(Question {
                    id: QuestionId::new(index),
                    prompt,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if questions.is_empty() {
            return Err(QuestionnaireError::Empty);
        }
        Ok(Self { questions })
    }

    /// Questionnaire shown when no file is configured.
    #[must_use]
    pub fn builtin() -> Self {
        let prompts = [
            "Você está sentindo dor no momento?",
            "Os sintomas começaram há mais de três dias?",
            "Você tem febre ou calafrios?",
            "Você faz uso de alguma medicação contínua?",
        ];
        Self {
            questions: prompts
                .iter()
                .enumerate()
                .map(|(index, prompt)| Question {
                    id: QuestionId::new(index),
                    prompt: (*prompt).to_string(),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed questionnaire.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(id.index())
    }

    #[must_use]
    pub fn contains(&self, id: QuestionId) -> bool {
        id.index() < self.questions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
