use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseLabelError;

/// Subject the collected activity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Math,
    Geometry,
    Statistics,
}

impl Subject {
    /// All options, in the order the step-1 form presents them.
    pub const ALL: [Subject; 3] = [Subject::Math, Subject::Geometry, Subject::Statistics];

    /// The label written to the persisted log.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::Geometry => "Geometry",
            Subject::Statistics => "Statistics",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Subject {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Math" => Ok(Subject::Math),
            "Geometry" => Ok(Subject::Geometry),
            "Statistics" => Ok(Subject::Statistics),
            other => Err(ParseLabelError::new("subject", other)),
        }
    }
}

/// Where the assigned activity was done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceType {
    Notebook,
    Textbook,
    LooseSheet,
}

impl SourceType {
    /// All options, in the order the step-1 form presents them.
    pub const ALL: [SourceType; 3] = [
        SourceType::Notebook,
        SourceType::Textbook,
        SourceType::LooseSheet,
    ];

    /// The label written to the persisted log.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SourceType::Notebook => "Notebook",
            SourceType::Textbook => "Textbook",
            SourceType::LooseSheet => "LooseSheet",
        }
    }

    /// Human-facing label for form widgets.
    #[must_use]
    pub fn display_label(self) -> &'static str {
        match self {
            SourceType::Notebook => "Notebook",
            SourceType::Textbook => "Textbook",
            SourceType::LooseSheet => "Loose sheet",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Notebook" => Ok(SourceType::Notebook),
            "Textbook" => Ok(SourceType::Textbook),
            "LooseSheet" => Ok(SourceType::LooseSheet),
            other => Err(ParseLabelError::new("source type", other)),
        }
    }
}

/// What the teacher configured on step 1 for the current collection.
///
/// Created at step-1 submission, held in the wizard session, consumed at
/// finalization. `pages` is free text and may be empty; `collection_date`
/// accepts any date, past or future.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub subject: Subject,
    pub source_type: SourceType,
    pub pages: String,
    pub collection_date: NaiveDate,
}

impl SessionInfo {
    #[must_use]
    pub fn new(
        subject: Subject,
        source_type: SourceType,
        pages: impl Into<String>,
        collection_date: NaiveDate,
    ) -> Self {
        Self {
            subject,
            source_type,
            pages: pages.into(),
            collection_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_today;

    #[test]
    fn subject_labels_round_trip() {
        for subject in Subject::ALL {
            assert_eq!(subject.as_str().parse::<Subject>().unwrap(), subject);
        }
    }

    #[test]
    fn source_type_labels_round_trip() {
        for source in SourceType::ALL {
            assert_eq!(source.as_str().parse::<SourceType>().unwrap(), source);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!("History".parse::<Subject>().is_err());
        assert!("Slate".parse::<SourceType>().is_err());
    }

    #[test]
    fn session_info_allows_empty_pages() {
        let info = SessionInfo::new(Subject::Math, SourceType::Notebook, "", fixed_today());
        assert!(info.pages.is_empty());
        assert_eq!(info.collection_date.to_string(), "2024-03-01");
    }
}
