pub mod content_store;
pub mod fixture;
pub mod review;
pub mod state;
pub mod submission_store;

pub use crate::domain::model::{CareerSubmission, ContactSubmission, SiteContent};
pub use crate::domain::ports::{Clock, ConfigProvider, IdGenerator, Submission};
pub use crate::utils::error::Result;
pub use content_store::ContentStore;
pub use state::AppState;
pub use submission_store::SubmissionStore;
