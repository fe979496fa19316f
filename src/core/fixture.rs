//! Demo submissions loaded at boot.
//!
//! The bundled file ships inside the binary. Operators may point the server at
//! another file with the same shape; either way every record is validated with
//! the same schemas the public forms use, and a bad record aborts startup.

use crate::domain::model::{CareerSubmission, ContactSubmission};
use crate::domain::schema::parse_object;
use crate::utils::error::{Result, SiteError};
use serde_json::Value;
use std::path::Path;

pub const BUNDLED_FIXTURE: &str = include_str!("../../data/mock-submissions.json");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionFixture {
    pub contact_submissions: Vec<ContactSubmission>,
    pub career_submissions: Vec<CareerSubmission>,
}

impl SubmissionFixture {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_FIXTURE)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| SiteError::Fixture {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        parse_object(&value, |f| SubmissionFixture {
            contact_submissions: f.list("contactSubmissions", ContactSubmission::read),
            career_submissions: f.list("careerSubmissions", CareerSubmission::read),
        })
        .map_err(|errors| SiteError::Fixture {
            message: errors.to_string(),
        })
    }
}
