use coleta_core::model::{ClassGroup, Student};

/// Supplies the ordered student list for a class group.
///
/// Pure read: no side effects, no failure modes. Swapping the static list
/// for a per-group lookup is the intended extension point; replacements
/// must keep returning the same `Student` shape in a stable order.
pub trait RosterProvider: Send + Sync {
    /// The ordered roster for the given group.
    fn roster(&self, class_group: &ClassGroup) -> Vec<Student>;

    /// The group served when none is configured.
    fn default_group(&self) -> ClassGroup;
}

/// The built-in roster: a single hardcoded class.
///
/// In the future this may come from another tab of the spreadsheet.
pub struct StaticRoster {
    class_group: ClassGroup,
    students: Vec<Student>,
}

impl StaticRoster {
    #[must_use]
    pub fn new(class_group: ClassGroup, names: &[&str]) -> Self {
        let students = names
            .iter()
            .map(|name| Student::new(*name, class_group.clone()))
            .collect();
        Self {
            class_group,
            students,
        }
    }

    /// The default class shipped with the app.
    #[must_use]
    pub fn default_class() -> Self {
        Self::new(
            ClassGroup::default_group(),
            &[
                "Ana Clara",
                "Bernardo Silva",
                "Carlos Eduardo",
                "Daniela Souza",
                "Enzo Gabriel",
            ],
        )
    }
}

impl RosterProvider for StaticRoster {
    fn roster(&self, class_group: &ClassGroup) -> Vec<Student> {
        // Per-group selection is not wired up yet: any unknown group falls
        // back to the built-in class.
        let _ = class_group;
        self.students.clone()
    }

    fn default_group(&self) -> ClassGroup {
        self.class_group.clone()
    }
}
