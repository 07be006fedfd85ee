#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod roster;
pub mod wizard;

pub use coleta_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, CollectionError, WizardError};
pub use roster::{RosterProvider, StaticRoster};
pub use wizard::{CollectionWorkflow, WizardSession, WizardStep};
