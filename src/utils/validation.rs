use crate::utils::error::{Result, SiteError};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

// Local part may not start with a dot or contain "..", checked separately.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

pub fn is_valid_email(value: &str) -> bool {
    if value.starts_with('.') || value.contains("..") {
        return false;
    }
    EMAIL_RE.is_match(value)
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SiteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("cors.allowed_origins", "https://g3modena.com").is_ok());
        assert!(validate_url("cors.allowed_origins", "http://localhost:3000").is_ok());
        assert!(validate_url("cors.allowed_origins", "").is_err());
        assert!(validate_url("cors.allowed_origins", "invalid-url").is_err());
        assert!(validate_url("cors.allowed_origins", "ftp://example.com").is_err());
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("info@g3modena.com"));
        assert!(is_valid_email("mario.rossi+eventi@catering.co.uk"));
        assert!(is_valid_email("o'brien@example.ie"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("info"));
        assert!(!is_valid_email("info@"));
        assert!(!is_valid_email("@g3modena.com"));
        assert!(!is_valid_email("info@g3modena"));
        assert!(!is_valid_email(".info@g3modena.com"));
        assert!(!is_valid_email("in..fo@g3modena.com"));
        assert!(!is_valid_email("info.@g3modena.com"));
        assert!(!is_valid_email("info@g3modena.c0m"));
        assert!(!is_valid_email("info @g3modena.com"));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("server.port", 8080u32, 1, 65535).is_ok());
        assert!(validate_range("server.port", 0u32, 1, 65535).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data.fixture_path", "data/mock-submissions.json").is_ok());
        assert!(validate_path("data.fixture_path", "").is_err());
        assert!(validate_path("data.fixture_path", "bad\0path").is_err());
    }
}
