use intake_core::model::{PatientField, PatientForm, QuestionId, TableRow, Version};
use services::IntakeService;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntakeIntent {
    Start,
    SelectVersion(Version),
    Advance,
    SetField(PatientField, String),
    Submit,
    Restart,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionItemVm {
    pub id: QuestionId,
    pub element_id: String,
    pub prompt: String,
    pub visible: bool,
}

impl QuestionItemVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.visible {
            "pergunta visivel"
        } else {
            "pergunta"
        }
    }
}

/// Table row with every cell already escaped for insertion as markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatientRowVm {
    pub cells: [String; 3],
}

/// Escape user-supplied text so it renders literally inside a table cell.
#[must_use]
pub fn escape_cell(value: &str) -> String {
    ammonia::clean_text(value)
}

#[must_use]
pub fn map_patient_row(row: &TableRow) -> PatientRowVm {
    PatientRowVm {
        cells: row.cells().map(escape_cell),
    }
}

pub struct IntakeVm {
    intake: IntakeService,
}

impl IntakeVm {
    #[must_use]
    pub fn new(intake: IntakeService) -> Self {
        Self { intake }
    }

    pub fn apply(&mut self, intent: IntakeIntent) {
        match intent {
            IntakeIntent::Start => self.intake.start(),
            IntakeIntent::SelectVersion(version) => self.intake.select_version(version),
            IntakeIntent::Advance => {
                self.intake.advance();
            }
            IntakeIntent::SetField(field, value) => self.intake.set_field(field, value),
            IntakeIntent::Submit => {
                self.intake.submit();
            }
            IntakeIntent::Restart => self.intake.restart(),
        }
    }

    #[must_use]
    pub fn intake(&self) -> &IntakeService {
        &self.intake
    }

    #[must_use]
    pub fn questions(&self) -> Vec<QuestionItemVm> {
        self.intake
            .questionnaire()
            .iter()
            .map(|question| QuestionItemVm {
                id: question.id(),
                element_id: question.id().element_id(),
                prompt: question.prompt().to_string(),
                visible: self.intake.is_visible(question.id()),
            })
            .collect()
    }

    #[must_use]
    pub fn rows(&self) -> Vec<PatientRowVm> {
        self.intake.table().rows().iter().map(map_patient_row).collect()
    }

    #[must_use]
    pub fn form(&self) -> &PatientForm {
        self.intake.form()
    }

    #[must_use]
    pub fn registration_visible(&self) -> bool {
        self.intake.registration_visible()
    }

    #[must_use]
    pub fn version(&self) -> Version {
        self.intake.version()
    }
}
