use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::WizardView;

// The two wizard screens are reachable only in sequence, so the router
// exposes a single route and the wizard drives its own step state.
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", WizardView)] Wizard {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { "Activity Collection" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
