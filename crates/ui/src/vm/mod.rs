mod wizard_vm;

pub use wizard_vm::{SaveState, WizardIntent, WizardVm};
