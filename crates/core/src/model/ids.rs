use std::fmt;

/// Position of a question inside its questionnaire (zero-based).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(usize);

impl QuestionId {
    /// The first question of any questionnaire.
    pub const FIRST: Self = Self(0);

    /// Creates a new `QuestionId`
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying index
    #[must_use]
    pub fn index(&self) -> usize {
        self.0
    }

    /// Returns the id of the following sibling, without bounds checking.
    #[must_use]
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Element id used by the rendered page (`pergunta1`, `pergunta2`, ...).
    #[must_use]
    pub fn element_id(&self) -> String {
        format!("pergunta{}", self.0 + 1)
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
