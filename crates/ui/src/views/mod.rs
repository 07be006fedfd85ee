mod collect;
mod setup;
mod state;
mod wizard;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use collect::CollectView;
pub use setup::SetupView;
pub use state::ViewError;
pub use wizard::WizardView;
