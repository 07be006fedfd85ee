mod session;
mod workflow;

pub use session::{WizardSession, WizardStep};
pub use workflow::CollectionWorkflow;
