use std::sync::Arc;

use coleta_core::model::ClassGroup;
use storage::repository::Storage;
use storage::sheets::SheetsConfig;

use crate::Clock;
use crate::error::AppServicesError;
use crate::roster::{RosterProvider, StaticRoster};
use crate::wizard::CollectionWorkflow;

/// Assembles the app-facing services around a chosen storage backend.
#[derive(Clone)]
pub struct AppServices {
    class_group: ClassGroup,
    roster: Arc<dyn RosterProvider>,
    workflow: Arc<CollectionWorkflow>,
}

impl AppServices {
    /// Build services over an already-constructed storage backend.
    #[must_use]
    pub fn new(clock: Clock, storage: &Storage, class_group: Option<ClassGroup>) -> Self {
        let roster: Arc<dyn RosterProvider> = Arc::new(StaticRoster::default_class());
        let class_group = class_group.unwrap_or_else(|| roster.default_group());
        let workflow = Arc::new(CollectionWorkflow::new(clock, Arc::clone(&storage.log)));
        Self {
            class_group,
            roster,
            workflow,
        }
    }

    /// Build services backed by the in-memory log (testing, demos).
    #[must_use]
    pub fn new_in_memory(clock: Clock) -> Self {
        Self::new(clock, &Storage::in_memory(), None)
    }

    /// Build services backed by a local `SQLite` log file.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        class_group: Option<ClassGroup>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(clock, &storage, class_group))
    }

    /// Build services backed by the remote sheet.
    #[must_use]
    pub fn new_google_sheets(
        config: SheetsConfig,
        clock: Clock,
        class_group: Option<ClassGroup>,
    ) -> Self {
        Self::new(clock, &Storage::google_sheets(config), class_group)
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
