use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use intake_core::model::{Questionnaire, Version};
use services::IntakeService;

use crate::context::{UiApp, build_app_context};
use crate::views::IntakeView;
use crate::views::intake::IntakeTestHandles;
use crate::vm::IntakeIntent;

#[derive(Clone)]
struct TestApp {
    questionnaire: Questionnaire,
    version: Version,
}

impl UiApp for TestApp {
    fn questionnaire(&self) -> Questionnaire {
        self.questionnaire.clone()
    }

    fn initial_version(&self) -> Version {
        self.version
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: IntakeTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { IntakeView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: IntakeTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: IntakeIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn intake(&self) -> IntakeService {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| vm.read().intake().clone())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(prompts: &[&str]) -> ViewHarness {
    let questionnaire = Questionnaire::from_prompts(prompts.to_vec()).expect("questionnaire");
    let app = Arc::new(TestApp {
        questionnaire,
        version: Version::Basic,
    });
    let handles = IntakeTestHandles::default();

    let mut harness = ViewHarness {
        dom: VirtualDom::new_with_props(
            ViewRouterHarness,
            ViewHarnessProps {
                app,
                handles: handles.clone(),
            },
        ),
        handles,
    };
    harness.rebuild();
    harness
}
