use crate::model::{QuestionId, Questionnaire};

//
// ─── STAGE ─────────────────────────────────────────────────────────────────────
//

/// What the page currently shows.
///
/// A single value stands in for the per-question visibility flags, so at most
/// one question can be visible at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Nothing is visible; the page has not started the questionnaire yet.
    Idle,
    /// Exactly this question is visible; the registration form is hidden.
    Question(QuestionId),
    /// Every question was passed; the registration form is visible.
    Registration,
}

/// Result of a single `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced { from: QuestionId, to: QuestionId },
    RegistrationRevealed { from: QuestionId },
    /// No question was visible, so nothing changed.
    NoActiveQuestion,
}

//
// ─── STEPPER ───────────────────────────────────────────────────────────────────
//

/// Walks the questions of a questionnaire one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionStepper {
    question_count: usize,
    stage: Stage,
}

impl QuestionStepper {
    /// Create a stepper with nothing visible. Call `show_first` once the page
    /// is up.
    #[must_use]
    pub fn new(questionnaire: &Questionnaire) -> Self {
        Self {
            question_count: questionnaire.len(),
            stage: Stage::Idle,
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn current(&self) -> Option<QuestionId> {
        match self.stage {
            Stage::Question(id) => Some(id),
            Stage::Idle | Stage::Registration => None,
        }
    }

    #[must_use]
    pub fn is_visible(&self, id: QuestionId) -> bool {
        self.current() == Some(id)
    }

    #[must_use]
    pub fn registration_visible(&self) -> bool {
        self.stage == Stage::Registration
    }

    /// Hide the visible question and show its next sibling, or the registration
    /// form once the last question is passed.
    pub fn advance(&mut self) -> StepOutcome {
        let Some(from) = self.current() else {
            return StepOutcome::NoActiveQuestion;
        };

        let next = from.next();
        if next.index() < self.question_count {
            self.stage = Stage::Question(next);
            StepOutcome::Advanced { from, to: next }
        } else {
            self.stage = Stage::Registration;
            StepOutcome::RegistrationRevealed { from }
        }
    }

    /// Hide the registration form and show the first question.
    pub fn show_first(&mut self) {
        self.stage = Stage::Question(QuestionId::FIRST);
    }

    #[cfg(test)]
    pub(crate) fn hide_all(&mut self) {
        self.stage = Stage::Idle;
    }
}
