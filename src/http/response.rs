use crate::domain::model::SiteContent;
use crate::domain::schema::ValidationErrors;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Tells every caller, the admin UI included, that the content route is open.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessMeta {
    pub auth_ready: bool,
    pub auth_enabled: bool,
    pub note: &'static str,
}

impl AccessMeta {
    pub fn open() -> Self {
        Self {
            auth_ready: true,
            auth_enabled: false,
            note: "Auth not enabled yet. Protect this route before production.",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContentEnvelope {
    pub data: SiteContent,
    pub meta: AccessMeta,
}

impl ContentEnvelope {
    pub fn new(data: SiteContent) -> Self {
        Self {
            data,
            meta: AccessMeta::open(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthBody {
    pub status: &'static str,
    pub contact_submissions: usize,
    pub career_submissions: usize,
}
