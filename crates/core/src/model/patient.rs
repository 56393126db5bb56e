/// The three inputs of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatientField {
    Name,
    Age,
    Email,
}

impl PatientField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Age, Self::Email];

    /// Element id of the matching input on the rendered page.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Name => "nome",
            Self::Age => "idade",
            Self::Email => "email",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Nome",
            Self::Age => "Idade",
            Self::Email => "E-mail",
        }
    }
}

/// Current raw values of the registration inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientForm {
    name: String,
    age: String,
    email: String,
}

impl PatientForm {
    #[must_use]
    pub fn new(name: impl Into<String>, age: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            email: email.into(),
        }
    }

    #[must_use]
    pub fn value(&self, field: PatientField) -> &str {
        match field {
            PatientField::Name => &self.name,
            PatientField::Age => &self.age,
            PatientField::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: PatientField, value: impl Into<String>) {
        let slot = match field {
            PatientField::Name => &mut self.name,
            PatientField::Age => &mut self.age,
            PatientField::Email => &mut self.email,
        };
        *slot = value.into();
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.age.is_empty() && self.email.is_empty()
    }

    /// Capture the current values and reset every input to an empty string.
    pub fn take_record(&mut self) -> PatientRecord {
        let form = std::mem::take(self);
        PatientRecord {
            name: form.name,
            age: form.age,
            email: form.email,
        }
    }
}

/// Name/age/email triple captured at submission time. Values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientRecord {
    pub name: String,
    pub age: String,
    pub email: String,
}

impl PatientRecord {
    /// Cell values in table column order.
    #[must_use]
    pub fn cells(&self) -> [&str; 3] {
        [self.name.as_str(), self.age.as_str(), self.email.as_str()]
    }
}
