/// User-visible failure shown by the wizard.
///
/// Diagnostic detail (message + source chain) goes to the operational log
/// in the services layer; the screen only gets a retryable message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    SaveFailed,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::SaveFailed => "Save failed. Check the connection and try again.",
        }
    }
}
