#![allow(non_snake_case)]

use std::sync::Arc;

use services::{AppServices, Clock};
use ui::{App, UiApp, build_app_context};

// Dev entry point: runs the wizard against the in-memory backend. The real
// backend selection lives in `crates/app`.
fn main() {
    let services = AppServices::new_in_memory(Clock::default_clock());
    let app: Arc<dyn UiApp> = Arc::new(services);
    let context = build_app_context(&app);

    dioxus::LaunchBuilder::desktop()
        .with_context(context)
        .launch(App);
}
