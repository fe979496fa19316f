use crate::domain::schema::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Store unavailable: {store}")]
    StoreUnavailable { store: &'static str },

    #[error("Fixture error: {message}")]
    Fixture { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl From<ValidationErrors> for SiteError {
    fn from(errors: ValidationErrors) -> Self {
        SiteError::Validation(errors)
    }
}

impl SiteError {
    pub fn is_validation(&self) -> bool {
        matches!(self, SiteError::Validation(_))
    }

    /// Text shown to the operator on startup failures.
    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::Validation(errors) => format!("Invalid payload: {}", errors),
            SiteError::StoreUnavailable { store } => {
                format!("The {} store is unavailable, restart the service", store)
            }
            SiteError::Fixture { message } => {
                format!("Could not load the demo submissions: {}", message)
            }
            SiteError::IoError(e) => format!("File access failed: {}", e),
            SiteError::SerializationError(e) => format!("Malformed JSON: {}", e),
            SiteError::ConfigError { message } => format!("Configuration problem: {}", message),
            SiteError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Setting '{}' has invalid value '{}': {}", field, value, reason),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
