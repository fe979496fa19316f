pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::AppConfig;
pub use crate::core::{review, AppState, ContentStore, SubmissionStore};
pub use domain::model::{
    CareerSubmission, CareerSubmissionInput, ClientReference, ContactSubmission,
    ContactSubmissionInput, SiteContent,
};
pub use domain::schema::{Rule, Schema, ValidationErrors};
pub use utils::error::{Result, SiteError};
