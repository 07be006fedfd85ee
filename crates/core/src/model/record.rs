use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ActivityStatus, AttendanceRow, ClassGroup, ParseLabelError, SessionInfo, SourceType,
            Subject};

/// Column order and naming of the destination table.
///
/// Every write must match this exactly. The store keeps the legacy
/// Portuguese headers for the student name and class group columns.
pub const WIRE_COLUMNS: [&str; 7] = [
    "collection_date",
    "subject",
    "source_type",
    "pages",
    "aluno",
    "turma",
    "status",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RecordError {
    #[error("expected {expected} columns, got {got}")]
    ColumnCount { expected: usize, got: usize },

    #[error("invalid collection date: {raw}")]
    InvalidDate { raw: String },

    #[error(transparent)]
    Label(#[from] ParseLabelError),
}

/// One append-only persisted record: a single student's result for a
/// single collected activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub collection_date: NaiveDate,
    pub subject: Subject,
    pub source_type: SourceType,
    pub pages: String,
    pub student_name: String,
    pub class_group: ClassGroup,
    pub status: ActivityStatus,
}

impl ActivityRecord {
    /// Combines an edited attendance row with the stored session info.
    #[must_use]
    pub fn from_attendance(info: &SessionInfo, row: &AttendanceRow) -> Self {
        Self {
            collection_date: info.collection_date,
            subject: info.subject,
            source_type: info.source_type,
            pages: info.pages.clone(),
            student_name: row.student_name.clone(),
            class_group: row.class_group.clone(),
            status: row.status,
        }
    }

    /// Serializes the record as one table row, in [`WIRE_COLUMNS`] order.
    #[must_use]
    pub fn to_cells(&self) -> [String; 7] {
        [
            self.collection_date.format(DATE_FORMAT).to_string(),
            self.subject.as_str().to_string(),
            self.source_type.as_str().to_string(),
            self.pages.clone(),
            self.student_name.clone(),
            self.class_group.as_str().to_string(),
            self.status.as_str().to_string(),
        ]
    }

    /// Rehydrates a record from one table row read back from the store.
    ///
    /// # Errors
    ///
    /// Returns `RecordError` if the row has the wrong width, an
    /// unparseable date, or an unknown enum label.
    pub fn from_cells(cells: &[String]) -> Result<Self, RecordError> {
        if cells.len() != WIRE_COLUMNS.len() {
            return Err(RecordError::ColumnCount {
                expected: WIRE_COLUMNS.len(),
                got: cells.len(),
            });
        }

        let collection_date = NaiveDate::parse_from_str(&cells[0], DATE_FORMAT).map_err(|_| {
            RecordError::InvalidDate {
                raw: cells[0].clone(),
            }
        })?;

        Ok(Self {
            collection_date,
            subject: cells[1].parse()?,
            source_type: cells[2].parse()?,
            pages: cells[3].clone(),
            student_name: cells[4].clone(),
            class_group: ClassGroup::new(cells[5].clone()),
            status: cells[6].parse()?,
        })
    }
}
