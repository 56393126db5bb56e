use intake_core::model::{
    PatientField, PatientForm, PatientRecord, PatientTable, QuestionId, Questionnaire, Version,
};
use intake_core::{QuestionStepper, Stage, StepOutcome};

//
// ─── INTAKE ────────────────────────────────────────────────────────────────────
//

/// In-memory state of the intake page: which question is shown, the
/// registration inputs, and the patient table.
///
/// Every entry point of the page maps to one method here; handlers run to
/// completion, so no locking is involved.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeService {
    questionnaire: Questionnaire,
    stepper: QuestionStepper,
    form: PatientForm,
    table: PatientTable,
    version: Version,
}

impl IntakeService {
    /// Create the flow with nothing visible. The view calls `start` on mount.
    #[must_use]
    pub fn new(questionnaire: Questionnaire) -> Self {
        let stepper = QuestionStepper::new(&questionnaire);
        Self {
            questionnaire,
            stepper,
            form: PatientForm::default(),
            table: PatientTable::new(),
            version: Version::default(),
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Page-load entry point: show the first question.
    pub fn start(&mut self) {
        self.stepper.show_first();
        tracing::debug!(questions = self.questionnaire.len(), "intake started");
    }

    pub fn select_version(&mut self, version: Version) {
        self.version = version;
        tracing::info!(%version, "questionnaire version selected");
    }

    /// Show the next question, or the registration form after the last one.
    pub fn advance(&mut self) -> StepOutcome {
        let outcome = self.stepper.advance();
        match outcome {
            StepOutcome::Advanced { from, to } => {
                tracing::debug!(%from, %to, "advanced to next question");
            }
            StepOutcome::RegistrationRevealed { from } => {
                tracing::debug!(%from, "questions exhausted, showing registration form");
            }
            StepOutcome::NoActiveQuestion => {
                tracing::warn!(stage = ?self.stepper.stage(), "advance ignored: no visible question");
            }
        }
        outcome
    }

    pub fn set_field(&mut self, field: PatientField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Capture the form into a new table row and clear the inputs.
    pub fn add_patient_row(&mut self) -> PatientRecord {
        let record = self.form.take_record();
        self.table.append(record.clone());
        tracing::info!(rows = self.table.len(), "patient row added");
        record
    }

    /// Form submission: add the patient row, then restart the questionnaire.
    pub fn submit(&mut self) -> PatientRecord {
        let record = self.add_patient_row();
        self.restart();
        record
    }

    /// Hide the registration form, drop every table row, show the first question.
    pub fn restart(&mut self) {
        self.table.clear();
        self.stepper.show_first();
        tracing::debug!("intake restarted");
    }

    #[must_use]
    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stepper.stage()
    }

    #[must_use]
    pub fn is_visible(&self, id: QuestionId) -> bool {
        self.stepper.is_visible(id)
    }

    #[must_use]
    pub fn registration_visible(&self) -> bool {
        self.stepper.registration_visible()
    }

    #[must_use]
    pub fn form(&self) -> &PatientForm {
        &self.form
    }

    #[must_use]
    pub fn table(&self) -> &PatientTable {
        &self.table
    }

    #[must_use]
    pub fn version(&self) -> Version {
        self.version
    }
}
