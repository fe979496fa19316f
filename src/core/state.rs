use crate::core::content_store::ContentStore;
use crate::core::fixture::SubmissionFixture;
use crate::core::submission_store::SubmissionStore;
use crate::domain::model::{CareerSubmission, ContactSubmission, SiteContent};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use std::sync::Arc;

/// Everything the handlers read and write. Built once at startup.
pub struct AppState {
    pub content: ContentStore,
    pub contacts: SubmissionStore<ContactSubmission>,
    pub careers: SubmissionStore<CareerSubmission>,
}

impl AppState {
    pub fn new(content: SiteContent, fixture: SubmissionFixture) -> Arc<Self> {
        Arc::new(Self {
            content: ContentStore::new(content),
            contacts: SubmissionStore::new(fixture.contact_submissions),
            careers: SubmissionStore::new(fixture.career_submissions),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Arc<Self>> {
        let fixture = if !config.seed_fixture() {
            SubmissionFixture::empty()
        } else if let Some(path) = config.fixture_path() {
            tracing::info!("Loading demo submissions from {}", path);
            SubmissionFixture::from_file(path)?
        } else {
            SubmissionFixture::bundled()?
        };

        tracing::info!(
            contacts = fixture.contact_submissions.len(),
            careers = fixture.career_submissions.len(),
            "Submission stores seeded"
        );

        Ok(Self::new(SiteContent::default(), fixture))
    }
}
