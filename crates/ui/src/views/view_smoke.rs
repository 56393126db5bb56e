use dioxus::prelude::*;
use intake_core::model::{PatientField, PatientRecord, PatientTable, QuestionId, Version};
use intake_core::Stage;

use super::intake::PatientTableView;
use super::test_harness::{ViewHarness, setup_view_harness};
use crate::vm::{IntakeIntent, map_patient_row};

const PROMPTS: [&str; 3] = ["Sente dor?", "Tem febre?", "Usa medicação?"];

fn fill_patient(harness: &mut ViewHarness, name: &str, age: &str, email: &str) {
    harness.dispatch(IntakeIntent::SetField(PatientField::Name, name.to_string()));
    harness.dispatch(IntakeIntent::SetField(PatientField::Age, age.to_string()));
    harness.dispatch(IntakeIntent::SetField(PatientField::Email, email.to_string()));
}

#[test]
fn intake_view_smoke_shows_first_question_on_load() {
    let harness = setup_view_harness(&PROMPTS);
    let html = harness.render();

    assert_eq!(html.matches("pergunta visivel").count(), 1, "{html}");
    assert!(html.contains("Sente dor?"), "missing prompt in {html}");
    assert!(html.contains("display: none"), "form should be hidden in {html}");
    assert!(html.contains("tabelaBody"), "missing table body in {html}");
    assert_eq!(harness.intake().stage(), Stage::Question(QuestionId::FIRST));
}

#[test]
fn intake_view_smoke_reveals_form_after_last_question() {
    let mut harness = setup_view_harness(&PROMPTS);

    for _ in 0..PROMPTS.len() - 1 {
        harness.dispatch(IntakeIntent::Advance);
    }
    let intake = harness.intake();
    assert!(intake.is_visible(QuestionId::new(PROMPTS.len() - 1)));
    assert!(!intake.registration_visible());

    harness.dispatch(IntakeIntent::Advance);
    let html = harness.render();
    assert!(harness.intake().registration_visible());
    assert!(!html.contains("pergunta visivel"), "no question should be visible in {html}");
    assert!(html.contains("display: block"), "form should be visible in {html}");
}

#[test]
fn intake_view_smoke_submit_restarts_flow() {
    let mut harness = setup_view_harness(&PROMPTS);
    for _ in 0..PROMPTS.len() {
        harness.dispatch(IntakeIntent::Advance);
    }
    fill_patient(&mut harness, "Ana", "34", "ana@x.com");
    assert_eq!(harness.intake().form().value(PatientField::Name), "Ana");

    harness.dispatch(IntakeIntent::Submit);

    let intake = harness.intake();
    assert!(intake.table().is_empty());
    assert!(intake.form().is_blank());
    assert!(!intake.registration_visible());
    assert!(intake.is_visible(QuestionId::FIRST));

    let html = harness.render();
    assert!(!html.contains("ana@x.com"), "row should be cleared in {html}");
    assert_eq!(html.matches("pergunta visivel").count(), 1, "{html}");
}

#[test]
fn patient_table_smoke_renders_escaped_cells() {
    let mut table = PatientTable::new();
    table.append(PatientRecord {
        name: "<script>alert(1)</script>".to_string(),
        age: "34".to_string(),
        email: "ana@x.com".to_string(),
    });
    let rows: Vec<_> = table.rows().iter().map(map_patient_row).collect();

    let html = dioxus_ssr::render_element(rsx! { PatientTableView { rows } });

    assert!(html.contains("&lt;script&gt;alert(1)"), "missing escaped cell in {html}");
    assert!(!html.contains("<script>"), "raw markup leaked into {html}");
    assert!(html.contains(">34<"), "missing age cell in {html}");
    assert!(html.contains("ana@x.com"), "missing email cell in {html}");
}

#[test]
fn intake_view_smoke_advance_after_form_is_noop() {
    let mut harness = setup_view_harness(&["Única?"]);
    harness.dispatch(IntakeIntent::Advance);
    harness.dispatch(IntakeIntent::Advance);

    let intake = harness.intake();
    assert_eq!(intake.stage(), Stage::Registration);
}

#[test]
fn intake_view_smoke_selects_version() {
    let mut harness = setup_view_harness(&PROMPTS);
    assert_eq!(harness.intake().version(), Version::Basic);

    harness.dispatch(IntakeIntent::SelectVersion(Version::Advanced));

    assert_eq!(harness.intake().version(), Version::Advanced);
    let html = harness.render();
    assert!(html.contains("intake-version--selected"), "{html}");
}

/// Opening tag of the element carrying `id="{id}"`.
fn tag_with_id<'a>(html: &'a str, id: &str) -> &'a str {
    let needle = format!("id=\"{id}\"");
    let at = html.find(&needle).unwrap_or_else(|| panic!("missing {needle} in {html}"));
    let start = html[..at].rfind('<').expect("tag start");
    let end = at + html[at..].find('>').expect("tag end");
    &html[start..=end]
}

#[test]
fn intake_view_smoke_exposes_page_element_ids() {
    let mut harness = setup_view_harness(&PROMPTS);
    let html = harness.render();

    for id in ["nome", "idade", "email", "perguntasPaciente", "tabelaBody", "pergunta1", "pergunta3"] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing id {id} in {html}");
    }
    assert!(tag_with_id(&html, "pergunta1").contains("pergunta visivel"), "{html}");
    assert!(!tag_with_id(&html, "pergunta2").contains("visivel"), "{html}");

    harness.dispatch(IntakeIntent::Advance);
    let html = harness.render();

    assert!(tag_with_id(&html, "pergunta2").contains("pergunta visivel"), "{html}");
    assert!(!tag_with_id(&html, "pergunta1").contains("visivel"), "{html}");
}

#[test]
fn intake_view_smoke_restart_button_returns_to_first_question() {
    let mut harness = setup_view_harness(&PROMPTS);
    for _ in 0..PROMPTS.len() {
        harness.dispatch(IntakeIntent::Advance);
    }
    assert!(harness.intake().registration_visible());
    let html = harness.render();
    assert!(html.contains("Recomeçar"), "missing restart button in {html}");

    harness.dispatch(IntakeIntent::Restart);

    let intake = harness.intake();
    assert!(!intake.registration_visible());
    assert_eq!(intake.stage(), Stage::Question(QuestionId::FIRST));
    let html = harness.render();
    assert!(tag_with_id(&html, "pergunta1").contains("pergunta visivel"), "{html}");
    assert!(tag_with_id(&html, "perguntasPaciente").contains("display: none"), "{html}");
}
