mod attendance;
mod record;
mod session_info;
mod student;

pub use attendance::{ActivityStatus, AttendanceRow};
pub use record::{ActivityRecord, RecordError, WIRE_COLUMNS};
pub use session_info::{SessionInfo, SourceType, Subject};
pub use student::{ClassGroup, Student};

use std::fmt;

/// Error type for parsing a fixed-option label from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLabelError {
    kind: &'static str,
    raw: String,
}

impl ParseLabelError {
    pub(crate) fn new(kind: &'static str, raw: &str) -> Self {
        Self {
            kind,
            raw: raw.to_string(),
        }
    }
}

impl fmt::Display for ParseLabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} label: {}", self.kind, self.raw)
    }
}

impl std::error::Error for ParseLabelError {}
