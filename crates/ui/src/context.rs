use std::sync::Arc;

use coleta_core::model::ClassGroup;
use services::{AppServices, CollectionWorkflow, RosterProvider};

pub trait UiApp: Send + Sync {
    fn class_group(&self) -> ClassGroup;

    fn roster(&self) -> Arc<dyn RosterProvider>;
    fn workflow(&self) -> Arc<CollectionWorkflow>;
}

impl UiApp for AppServices {
    fn class_group(&self) -> ClassGroup {
        AppServices::class_group(self)
    }

    fn roster(&self) -> Arc<dyn RosterProvider> {
        AppServices::roster(self)
    }

    fn workflow(&self) -> Arc<CollectionWorkflow> {
        AppServices::workflow(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    class_group: ClassGroup,
    roster: Arc<dyn RosterProvider>,
    workflow: Arc<CollectionWorkflow>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            class_group: app.class_group(),
            roster: app.roster(),
            workflow: app.workflow(),
        }
    }

    #[must_use]
    pub fn class_group(&self) -> ClassGroup {
        self.class_group.clone()
    }

    #[must_use]
    pub fn roster(&self) -> Arc<dyn RosterProvider> {
        Arc::clone(&self.roster)
    }

    #[must_use]
    pub fn workflow(&self) -> Arc<CollectionWorkflow> {
        Arc::clone(&self.workflow)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
