use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{ClassGroup, ParseLabelError, Student};

/// Completion status recorded for one student on step 2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityStatus {
    #[default]
    Done,
    Incomplete,
    NotDone,
    Absent,
}

impl ActivityStatus {
    /// All options, in the order the status column presents them.
    pub const ALL: [ActivityStatus; 4] = [
        ActivityStatus::Done,
        ActivityStatus::Incomplete,
        ActivityStatus::NotDone,
        ActivityStatus::Absent,
    ];

    /// The label written to the persisted log.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityStatus::Done => "Done",
            ActivityStatus::Incomplete => "Incomplete",
            ActivityStatus::NotDone => "NotDone",
            ActivityStatus::Absent => "Absent",
        }
    }

    /// Human-facing label for the status select.
    #[must_use]
    pub fn display_label(self) -> &'static str {
        match self {
            ActivityStatus::Done => "Done",
            ActivityStatus::Incomplete => "Incomplete",
            ActivityStatus::NotDone => "Not done",
            ActivityStatus::Absent => "Absent",
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityStatus {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Done" => Ok(ActivityStatus::Done),
            "Incomplete" => Ok(ActivityStatus::Incomplete),
            "NotDone" => Ok(ActivityStatus::NotDone),
            "Absent" => Ok(ActivityStatus::Absent),
            other => Err(ParseLabelError::new("status", other)),
        }
    }
}

/// One editable row of the step-2 attendance table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRow {
    pub student_name: String,
    pub class_group: ClassGroup,
    pub status: ActivityStatus,
}

impl AttendanceRow {
    /// Builds the default row for a roster student, status `Done`.
    #[must_use]
    pub fn for_student(student: &Student) -> Self {
        Self {
            student_name: student.name.clone(),
            class_group: student.class_group.clone(),
            status: ActivityStatus::Done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_done() {
        assert_eq!(ActivityStatus::default(), ActivityStatus::Done);
    }

    #[test]
    fn status_labels_round_trip() {
        for status in ActivityStatus::ALL {
            assert_eq!(status.as_str().parse::<ActivityStatus>().unwrap(), status);
        }
    }

    #[test]
    fn row_for_student_defaults_to_done() {
        let student = Student::new("Bernardo Silva", ClassGroup::default_group());
        let row = AttendanceRow::for_student(&student);
        assert_eq!(row.student_name, "Bernardo Silva");
        assert_eq!(row.status, ActivityStatus::Done);
    }
}
