use std::sync::Arc;

use intake_core::model::{Questionnaire, Version};

pub trait UiApp: Send + Sync {
    fn questionnaire(&self) -> Questionnaire;
    fn initial_version(&self) -> Version;
}

#[derive(Clone)]
pub struct AppContext {
    questionnaire: Questionnaire,
    initial_version: Version,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            questionnaire: app.questionnaire(),
            initial_version: app.initial_version(),
        }
    }

    #[must_use]
    pub fn questionnaire(&self) -> Questionnaire {
        self.questionnaire.clone()
    }

    #[must_use]
    pub fn initial_version(&self) -> Version {
        self.initial_version
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
