use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a class group (e.g. "6A").
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClassGroup(String);

impl ClassGroup {
    /// Creates a new `ClassGroup` from its label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The single group the built-in roster ships with.
    #[must_use]
    pub fn default_group() -> Self {
        Self::new("6A")
    }

    /// Returns the underlying label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClassGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassGroup({})", self.0)
    }
}

impl fmt::Display for ClassGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A student eligible for attendance entry.
///
/// Static for the process lifetime; supplied by a roster provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub class_group: ClassGroup,
}

impl Student {
    #[must_use]
    pub fn new(name: impl Into<String>, class_group: ClassGroup) -> Self {
        Self {
            name: name.into(),
            class_group,
        }
    }
}
