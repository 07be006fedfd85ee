use std::sync::Arc;

use chrono::NaiveDate;
use coleta_core::model::ActivityRecord;
use storage::repository::ActivityLogRepository;

use super::session::{WizardSession, WizardStep};
use crate::Clock;
use crate::error::CollectionError;

/// Orchestrates finalization of a collection over the persistence gateway.
#[derive(Clone)]
pub struct CollectionWorkflow {
    clock: Clock,
    log: Arc<dyn ActivityLogRepository>,
}

impl CollectionWorkflow {
    #[must_use]
    pub fn new(clock: Clock, log: Arc<dyn ActivityLogRepository>) -> Self {
        Self { clock, log }
    }

    /// The date the step-1 form defaults to.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Converts the session's edited rows into persisted records (exactly
    /// one per roster student, in roster order) and appends them to the
    /// log.
    ///
    /// On success the session is marked saved and stays on the collect
    /// step until the user starts a new collection. On failure the edited
    /// table is left intact so the user can retry without re-entering
    /// anything; retrying re-reads history and re-appends, so duplicate
    /// rows after a partial failure are possible (accepted limitation).
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::NotCollecting` outside the collect step,
    /// `CollectionError::MissingSessionInfo` if step 1 was never
    /// submitted, and `CollectionError::Persistence` when the gateway
    /// fails. Never panics.
    pub async fn finalize(&self, session: &mut WizardSession) -> Result<usize, CollectionError> {
        if session.step() != WizardStep::Collect {
            return Err(CollectionError::NotCollecting);
        }
        let info = session
            .session_info()
            .ok_or(CollectionError::MissingSessionInfo)?
            .clone();

        let records: Vec<ActivityRecord> = session
            .rows()
            .iter()
            .map(|row| ActivityRecord::from_attendance(&info, row))
            .collect();

        if let Err(err) = self.log.append(&records).await {
            tracing::error!(error = ?err, rows = records.len(), "failed to append collection");
            return Err(CollectionError::Persistence(err));
        }

        session.mark_saved();
        tracing::info!(rows = records.len(), date = %info.collection_date, "collection saved");
        Ok(records.len())
    }

    /// Re-reads the full persisted log.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::Persistence` when the gateway fails.
    pub async fn load_history(&self) -> Result<Vec<ActivityRecord>, CollectionError> {
        Ok(self.log.load_history().await?)
    }
}
