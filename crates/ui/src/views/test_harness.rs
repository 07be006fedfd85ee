use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use coleta_core::time::fixed_clock;
use services::AppServices;
use storage::repository::{ActivityLogRepository, InMemoryActivityLog, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::WizardView;
use crate::views::wizard::WizardTestHandles;

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    handles: WizardTestHandles,
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
    rsx! { WizardView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub log: Arc<dyn ActivityLogRepository>,
    pub handles: WizardTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
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

pub fn setup_wizard_harness_with_log(log: Arc<dyn ActivityLogRepository>) -> ViewHarness {
    let storage = Storage {
        log: Arc::clone(&log),
    };
    let app = Arc::new(AppServices::new(fixed_clock(), &storage, None));
    let handles = WizardTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, log, handles }
}

pub fn setup_wizard_harness() -> ViewHarness {
    setup_wizard_harness_with_log(Arc::new(InMemoryActivityLog::new()))
}
