mod intake_vm;

pub use intake_vm::{
    IntakeIntent, IntakeVm, PatientRowVm, QuestionItemVm, escape_cell, map_patient_row,
};
