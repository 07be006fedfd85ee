use coleta_core::model::{ActivityStatus, AttendanceRow, SessionInfo, Student};
use services::{CollectionWorkflow, WizardError, WizardSession, WizardStep};

use crate::views::ViewError;

/// Everything the user can do on either wizard screen.
#[derive(Clone, Debug, PartialEq)]
pub enum WizardIntent {
    Submit(SessionInfo),
    SetStatus { index: usize, status: ActivityStatus },
    Back,
    Save,
    NewCollection,
}

/// Where the current save attempt stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SaveState {
    #[default]
    Idle,
    Saving,
    Saved,
    Failed,
}

/// View model wrapping the wizard session for the two screens.
#[derive(Clone, Debug, PartialEq)]
pub struct WizardVm {
    session: WizardSession,
    save_state: SaveState,
}

impl Default for WizardVm {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardVm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: WizardSession::new(),
            save_state: SaveState::Idle,
        }
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.session.step()
    }

    #[must_use]
    pub fn session_info(&self) -> Option<&SessionInfo> {
        self.session.session_info()
    }

    #[must_use]
    pub fn rows(&self) -> &[AttendanceRow] {
        self.session.rows()
    }

    #[must_use]
    pub fn save_state(&self) -> SaveState {
        self.save_state
    }

    pub fn submit_setup(&mut self, info: SessionInfo, roster: &[Student]) {
        self.session.submit_setup(info, roster);
        self.save_state = SaveState::Idle;
    }

    /// # Errors
    ///
    /// Returns `WizardError` for edits the screen should never produce
    /// (wrong step, unknown row).
    pub fn set_status(&mut self, index: usize, status: ActivityStatus) -> Result<(), WizardError> {
        self.session.set_status(index, status)
    }

    pub fn back(&mut self) {
        self.session.back();
    }

    pub fn begin_save(&mut self) {
        self.save_state = SaveState::Saving;
    }

    /// Runs finalization and records the outcome for the screen.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::SaveFailed` when the gateway rejects the append;
    /// the edited table stays intact for a manual retry.
    pub async fn save(&mut self, workflow: &CollectionWorkflow) -> Result<usize, ViewError> {
        match workflow.finalize(&mut self.session).await {
            Ok(count) => {
                self.save_state = SaveState::Saved;
                Ok(count)
            }
            Err(_) => {
                self.save_state = SaveState::Failed;
                Err(ViewError::SaveFailed)
            }
        }
    }

    pub fn new_collection(&mut self) {
        self.session.reset();
        self.save_state = SaveState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coleta_core::model::{ClassGroup, SourceType, Subject};
    use coleta_core::time::{fixed_clock, fixed_today};
    use std::sync::Arc;
    use storage::repository::InMemoryActivityLog;

    fn roster() -> Vec<Student> {
        vec![Student::new("Ana Clara", ClassGroup::default_group())]
    }

    fn info() -> SessionInfo {
        SessionInfo::new(Subject::Math, SourceType::Notebook, "", fixed_today())
    }

    #[tokio::test]
    async fn save_marks_state_saved() {
        let workflow =
            CollectionWorkflow::new(fixed_clock(), Arc::new(InMemoryActivityLog::new()));
        let mut vm = WizardVm::new();
        vm.submit_setup(info(), &roster());

        vm.begin_save();
        assert_eq!(vm.save_state(), SaveState::Saving);

        let count = vm.save(&workflow).await.unwrap();
        assert_eq!(count, 1);
        assert_eq!(vm.save_state(), SaveState::Saved);
    }

    #[tokio::test]
    async fn new_collection_returns_to_setup() {
        let workflow =
            CollectionWorkflow::new(fixed_clock(), Arc::new(InMemoryActivityLog::new()));
        let mut vm = WizardVm::new();
        vm.submit_setup(info(), &roster());
        vm.save(&workflow).await.unwrap();

        vm.new_collection();

        assert_eq!(vm.step(), WizardStep::Configure);
        assert!(vm.session_info().is_none());
        assert_eq!(vm.save_state(), SaveState::Idle);
    }
}
