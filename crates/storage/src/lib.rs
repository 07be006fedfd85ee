#![forbid(unsafe_code)]

pub mod repository;
pub mod sheets;
pub mod sqlite;

pub use repository::{ActivityLogRepository, InMemoryActivityLog, PersistenceError, Storage};
pub use sheets::SheetsConfig;
