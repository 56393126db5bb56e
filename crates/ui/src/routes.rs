use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::IntakeView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", IntakeView)] Intake {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { "Cadastro de Pacientes" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
