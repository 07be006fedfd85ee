use coleta_core::model::{ActivityStatus, AttendanceRow, SessionInfo, Student};

use crate::error::WizardError;

/// The two screens of the wizard, reachable only in sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Configure,
    Collect,
}

/// Explicit per-session wizard state.
///
/// Holds the current step and the in-progress collection across UI
/// interactions. Nothing here is persisted; the state dies with the
/// session or on an explicit [`reset`](Self::reset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSession {
    step: WizardStep,
    session_info: Option<SessionInfo>,
    rows: Vec<AttendanceRow>,
    saved: bool,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    /// The initial state: configure step, nothing entered yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: WizardStep::Configure,
            session_info: None,
            rows: Vec::new(),
            saved: false,
        }
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub fn session_info(&self) -> Option<&SessionInfo> {
        self.session_info.as_ref()
    }

    #[must_use]
    pub fn rows(&self) -> &[AttendanceRow] {
        &self.rows
    }

    /// True once the current collection has been appended to the log.
    #[must_use]
    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Step-1 submission: stores the setup, rebuilds the attendance table
    /// from the roster with every status defaulted to `Done`, and moves to
    /// the collect step.
    ///
    /// Resubmitting replaces the previous setup outright; there is no
    /// merging of two submissions.
    pub fn submit_setup(&mut self, info: SessionInfo, roster: &[Student]) {
        self.session_info = Some(info);
        self.rows = roster.iter().map(AttendanceRow::for_student).collect();
        self.saved = false;
        self.step = WizardStep::Collect;
    }

    /// Edits one row of the attendance table.
    ///
    /// Row cardinality is fixed at roster size; rows are never inserted or
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::NotCollecting` outside the collect step and
    /// `WizardError::RowOutOfRange` for an unknown row index.
    pub fn set_status(&mut self, index: usize, status: ActivityStatus) -> Result<(), WizardError> {
        if self.step != WizardStep::Collect {
            return Err(WizardError::NotCollecting);
        }
        let row = self
            .rows
            .get_mut(index)
            .ok_or(WizardError::RowOutOfRange { index })?;
        row.status = status;
        Ok(())
    }

    /// Returns to the configure step, discarding nothing: the stored setup
    /// and the edited table survive.
    pub fn back(&mut self) {
        self.step = WizardStep::Configure;
    }

    /// "New Collection": clears everything back to the initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub(crate) fn mark_saved(&mut self) {
        self.saved = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coleta_core::model::{ClassGroup, SourceType, Subject};
    use coleta_core::time::fixed_today;

    fn roster() -> Vec<Student> {
        let group = ClassGroup::default_group();
        vec![
            Student::new("Ana Clara", group.clone()),
            Student::new("Bernardo Silva", group),
        ]
    }

    fn info(subject: Subject) -> SessionInfo {
        SessionInfo::new(subject, SourceType::Notebook, "p.10-12", fixed_today())
    }

    #[test]
    fn initial_state_is_configure_with_nothing_entered() {
        let session = WizardSession::new();
        assert_eq!(session.step(), WizardStep::Configure);
        assert!(session.session_info().is_none());
        assert!(session.rows().is_empty());
        assert!(!session.is_saved());
    }

    #[test]
    fn submit_stores_info_and_defaults_every_row_to_done() {
        let mut session = WizardSession::new();
        session.submit_setup(info(Subject::Math), &roster());

        assert_eq!(session.step(), WizardStep::Collect);
        assert_eq!(session.session_info().unwrap().subject, Subject::Math);
        assert_eq!(session.rows().len(), 2);
        assert!(
            session
                .rows()
                .iter()
                .all(|row| row.status == ActivityStatus::Done)
        );
    }

    #[test]
    fn set_status_edits_one_row_only() {
        let mut session = WizardSession::new();
        session.submit_setup(info(Subject::Math), &roster());

        session.set_status(1, ActivityStatus::Absent).unwrap();

        assert_eq!(session.rows()[0].status, ActivityStatus::Done);
        assert_eq!(session.rows()[1].status, ActivityStatus::Absent);
    }

    #[test]
    fn set_status_rejects_out_of_range_rows() {
        let mut session = WizardSession::new();
        session.submit_setup(info(Subject::Math), &roster());

        assert_eq!(
            session.set_status(2, ActivityStatus::Absent),
            Err(WizardError::RowOutOfRange { index: 2 })
        );
    }

    #[test]
    fn set_status_rejects_configure_step() {
        let mut session = WizardSession::new();
        assert_eq!(
            session.set_status(0, ActivityStatus::Absent),
            Err(WizardError::NotCollecting)
        );
    }

    #[test]
    fn back_preserves_setup_and_edits() {
        let mut session = WizardSession::new();
        session.submit_setup(info(Subject::Math), &roster());
        session.set_status(0, ActivityStatus::Incomplete).unwrap();

        session.back();

        assert_eq!(session.step(), WizardStep::Configure);
        assert!(session.session_info().is_some());
        assert_eq!(session.rows()[0].status, ActivityStatus::Incomplete);
    }

    #[test]
    fn resubmit_replaces_previous_setup_outright() {
        let mut session = WizardSession::new();
        session.submit_setup(info(Subject::Math), &roster());
        session.back();
        session.submit_setup(info(Subject::Geometry), &roster());

        let stored = session.session_info().unwrap();
        assert_eq!(stored.subject, Subject::Geometry);
        assert!(
            session
                .rows()
                .iter()
                .all(|row| row.status == ActivityStatus::Done)
        );
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut session = WizardSession::new();
        session.submit_setup(info(Subject::Math), &roster());
        session.mark_saved();

        session.reset();

        assert_eq!(session, WizardSession::new());
    }
}
