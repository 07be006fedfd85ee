use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use coleta_core::model::ActivityRecord;
use thiserror::Error;

/// Errors surfaced by persistence adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PersistenceError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("schema mismatch: {0}")]
    Schema(String),
}

/// Gateway to the persisted activity log.
///
/// The backing store is addressed as a whole table: reads return the full
/// history and writes replace the full table contents. There is no native
/// row-level append, so `append` is read-modify-write. Because no adapter
/// takes a cross-process transaction or optimistic-concurrency check, two
/// concurrent finalizations can race and one can silently overwrite the
/// other's history. That is an accepted limitation of the design; do not
/// paper over it with locking here.
#[async_trait]
pub trait ActivityLogRepository: Send + Sync {
    /// Fetch the entire existing log, oldest first.
    ///
    /// Always re-reads the backing store; implementations must not cache.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the store cannot be read.
    async fn load_history(&self) -> Result<Vec<ActivityRecord>, PersistenceError>;

    /// Fetch the current history, concatenate `rows` after it, and write
    /// the combined table back.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the store cannot be read or written.
    /// Never panics; the caller surfaces the error and keeps running.
    async fn append(&self, rows: &[ActivityRecord]) -> Result<(), PersistenceError>;
}

/// Simple in-memory log implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryActivityLog {
    rows: Arc<Mutex<Vec<ActivityRecord>>>,
}

impl InMemoryActivityLog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ActivityLogRepository for InMemoryActivityLog {
    async fn load_history(&self) -> Result<Vec<ActivityRecord>, PersistenceError> {
        let guard = self
            .rows
            .lock()
            .map_err(|e| PersistenceError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn append(&self, rows: &[ActivityRecord]) -> Result<(), PersistenceError> {
        let mut guard = self
            .rows
            .lock()
            .map_err(|e| PersistenceError::Connection(e.to_string()))?;
        guard.extend_from_slice(rows);
        Ok(())
    }
}

/// Aggregates the activity log behind a trait object for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub log: Arc<dyn ActivityLogRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            log: Arc::new(InMemoryActivityLog::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coleta_core::model::{
        ActivityStatus, AttendanceRow, ClassGroup, SessionInfo, SourceType, Subject,
    };
    use coleta_core::time::fixed_today;

    fn record(name: &str, status: ActivityStatus) -> ActivityRecord {
        let info = SessionInfo::new(Subject::Math, SourceType::Notebook, "p.10-12", fixed_today());
        let row = AttendanceRow {
            student_name: name.to_string(),
            class_group: ClassGroup::default_group(),
            status,
        };
        ActivityRecord::from_attendance(&info, &row)
    }

    #[tokio::test]
    async fn append_then_load_returns_rows_in_order() {
        let log = InMemoryActivityLog::new();
        let first = vec![record("Ana Clara", ActivityStatus::Done)];
        let second = vec![
            record("Bernardo Silva", ActivityStatus::Absent),
            record("Carlos Eduardo", ActivityStatus::Incomplete),
        ];

        log.append(&first).await.unwrap();
        log.append(&second).await.unwrap();

        let history = log.load_history().await.unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0], first[0]);
        assert_eq!(&history[1..], second.as_slice());
    }

    #[tokio::test]
    async fn load_history_of_empty_log_is_empty() {
        let log = InMemoryActivityLog::new();
        assert!(log.load_history().await.unwrap().is_empty());
    }
}
