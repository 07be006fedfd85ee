//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::PersistenceError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `WizardSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WizardError {
    #[error("wizard is not on the collect step")]
    NotCollecting,

    #[error("attendance row {index} is out of range")]
    RowOutOfRange { index: usize },
}

/// Errors emitted by `CollectionWorkflow`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CollectionError {
    #[error("no collection in progress")]
    NotCollecting,

    #[error("activity setup was never submitted")]
    MissingSessionInfo,

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
