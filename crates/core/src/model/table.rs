use crate::model::PatientRecord;

/// A rendered row of the patient table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    record: PatientRecord,
}

impl TableRow {
    #[must_use]
    pub fn record(&self) -> &PatientRecord {
        &self.record
    }

    #[must_use]
    pub fn cells(&self) -> [&str; 3] {
        self.record.cells()
    }
}

/// Body of the patient table. Rows are appended in submission order and only
/// ever removed all at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientTable {
    rows: Vec<TableRow>,
}

impl PatientTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: PatientRecord) {
        self.rows.push(TableRow { record });
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
