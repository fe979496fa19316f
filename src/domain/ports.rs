use crate::domain::schema::Schema;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A record created by one of the public forms.
pub trait Submission: Clone + Send + Sync + 'static {
    type Input: Schema + Send;

    /// Short name used in logs and store errors.
    const KIND: &'static str;

    fn from_input(input: Self::Input, id: String, created_at: DateTime<Utc>) -> Self;

    fn id(&self) -> &str;

    /// Fields matched by the admin free-text search.
    fn search_fields(&self) -> Vec<&str>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn max_body_bytes(&self) -> usize;
    fn allowed_origins(&self) -> &[String];
    fn cors_max_age_seconds(&self) -> u64;
    fn seed_fixture(&self) -> bool;
    fn fixture_path(&self) -> Option<&str>;
}
