use dioxus::prelude::*;

use intake_core::model::{PatientField, Version};
use services::IntakeService;

use crate::context::AppContext;
use crate::vm::{IntakeIntent, IntakeVm, PatientRowVm, QuestionItemVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn IntakeView() -> Element {
    let ctx = use_context::<AppContext>();

    // Building the state is the page-load step: the first question shows up
    // before the first render.
    let mut vm = use_signal(move || {
        let intake = IntakeService::new(ctx.questionnaire()).with_version(ctx.initial_version());
        let mut vm = IntakeVm::new(intake);
        vm.apply(IntakeIntent::Start);
        vm
    });

    let dispatch_intent = use_callback(move |intent: IntakeIntent| {
        vm.write().apply(intent);
    });

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<IntakeTestHandles>() {
            handles.register(dispatch_intent, vm);
        }
    }

    let state = vm.read();
    let questions = state.questions();
    let rows = state.rows();
    let version = state.version();
    let form_style = if state.registration_visible() {
        "display: block"
    } else {
        "display: none"
    };
    let name = state.form().value(PatientField::Name).to_string();
    let age = state.form().value(PatientField::Age).to_string();
    let email = state.form().value(PatientField::Email).to_string();
    drop(state);

    rsx! {
        div { class: "page intake",
            div { class: "intake-versions",
                VersionButton { version: Version::Basic, selected: version, on_intent: dispatch_intent }
                VersionButton { version: Version::Advanced, selected: version, on_intent: dispatch_intent }
            }

            div { class: "intake-questions",
                for item in questions {
                    QuestionCard { key: "{item.element_id}", item, on_intent: dispatch_intent }
                }
            }

            form {
                id: "perguntasPaciente",
                class: "intake-registration",
                style: "{form_style}",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    dispatch_intent.call(IntakeIntent::Submit);
                },
                PatientInput { field: PatientField::Name, value: name, on_intent: dispatch_intent }
                PatientInput { field: PatientField::Age, value: age, on_intent: dispatch_intent }
                PatientInput { field: PatientField::Email, value: email, on_intent: dispatch_intent }
                button { r#type: "submit", class: "intake-submit", "Cadastrar" }
                button {
                    r#type: "button",
                    class: "intake-restart",
                    onclick: move |_| dispatch_intent.call(IntakeIntent::Restart),
                    "Recomeçar"
                }
            }

            PatientTableView { rows }
        }
    }
}

#[component]
fn VersionButton(version: Version, selected: Version, on_intent: EventHandler<IntakeIntent>) -> Element {
    let class = if version == selected {
        "intake-version intake-version--selected"
    } else {
        "intake-version"
    };
    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            onclick: move |_| on_intent.call(IntakeIntent::SelectVersion(version)),
            "{version.label()}"
        }
    }
}

#[component]
fn QuestionCard(item: QuestionItemVm, on_intent: EventHandler<IntakeIntent>) -> Element {
    rsx! {
        div { id: "{item.element_id}", class: "{item.class()}",
            p { "{item.prompt}" }
            button {
                r#type: "button",
                class: "intake-next",
                onclick: move |_| on_intent.call(IntakeIntent::Advance),
                "Próxima"
            }
        }
    }
}

#[component]
fn PatientInput(field: PatientField, value: String, on_intent: EventHandler<IntakeIntent>) -> Element {
    let input_type = match field {
        PatientField::Email => "email",
        PatientField::Name | PatientField::Age => "text",
    };
    rsx! {
        label { r#for: field.element_id(), "{field.label()}" }
        input {
            id: field.element_id(),
            r#type: "{input_type}",
            value: "{value}",
            oninput: move |evt| on_intent.call(IntakeIntent::SetField(field, evt.value())),
        }
    }
}

#[component]
pub(crate) fn PatientTableView(rows: Vec<PatientRowVm>) -> Element {
    rsx! {
        table { class: "intake-table",
            thead {
                tr {
                    for field in PatientField::ALL {
                        th { "{field.label()}" }
                    }
                }
            }
            tbody { id: "tabelaBody",
                for (index, row) in rows.into_iter().enumerate() {
                    tr { key: "{index}",
                        // Cells arrive escaped from the view-model.
                        for cell in row.cells {
                            td { dangerous_inner_html: "{cell}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct IntakeTestHandles {
    dispatch: Rc<RefCell<Option<Callback<IntakeIntent>>>>,
    vm: Rc<RefCell<Option<Signal<IntakeVm>>>>,
}

#[cfg(test)]
impl IntakeTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<IntakeIntent>, vm: Signal<IntakeVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<IntakeIntent> {
        (*self.dispatch.borrow()).expect("intake dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<IntakeVm> {
        (*self.vm.borrow()).expect("intake vm registered")
    }
}
