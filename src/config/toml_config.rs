use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use tracing_subscriber::EnvFilter;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern compiles"));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_body_bytes: 10 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, used when `RUST_LOG` is not set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_age_seconds: 60 * 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub seed_fixture: bool,
    /// Falls back to the fixture bundled in the binary.
    pub fixture_path: Option<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            seed_fixture: true,
            fixture_path: None,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // Environment variables first
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` references. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        // Listener
        validate_non_empty_string("server.host", &self.server.host)?;
        validate_range("server.port", self.server.port, 1, u16::MAX)?;
        validate_range("server.max_body_bytes", self.server.max_body_bytes, 1024, usize::MAX)?;

        // Logging
        validate_non_empty_string("logging.level", &self.logging.level)?;
        EnvFilter::try_new(&self.logging.level).map_err(|e| {
            SiteError::InvalidConfigValueError {
                field: "logging.level".to_string(),
                value: self.logging.level.clone(),
                reason: e.to_string(),
            }
        })?;

        // CORS origins
        for origin in &self.cors.allowed_origins {
            validate_url("cors.allowed_origins", origin)?;
        }

        // Fixture path
        if let Some(path) = &self.data.fixture_path {
            validate_path("data.fixture_path", path)?;
        }

        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn host(&self) -> &str {
        &self.server.host
    }

    fn port(&self) -> u16 {
        self.server.port
    }

    fn max_body_bytes(&self) -> usize {
        self.server.max_body_bytes
    }

    fn allowed_origins(&self) -> &[String] {
        &self.cors.allowed_origins
    }

    fn cors_max_age_seconds(&self) -> u64 {
        self.cors.max_age_seconds
    }

    fn seed_fixture(&self) -> bool {
        self.data.seed_fixture
    }

    fn fixture_path(&self) -> Option<&str> {
        self.data.fixture_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
host = "127.0.0.1"
port = 9090
max_body_bytes = 2097152

[logging]
level = "g3_backoffice=debug"
format = "json"

[cors]
allowed_origins = ["https://g3modena.com", "http://localhost:3000"]
max_age_seconds = 600

[data]
seed_fixture = false
fixture_path = "data/mock-submissions.json"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:9090");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.cors.allowed_origins.len(), 2);
        assert!(!config.seed_fixture());
        assert_eq!(config.fixture_path(), Some("data/mock-submissions.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = AppConfig::from_toml_str("[server]\nport = 3001\n").unwrap();

        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging, LoggingConfig::default());
        assert!(config.data.seed_fixture);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("G3_TEST_CORS_ORIGIN", "https://staging.g3modena.com");

        let toml_content = r#"
[cors]
allowed_origins = ["${G3_TEST_CORS_ORIGIN}"]
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.cors.allowed_origins, vec!["https://staging.g3modena.com"]);

        std::env::remove_var("G3_TEST_CORS_ORIGIN");
    }

    #[test]
    fn test_config_validation() {
        let config = AppConfig::from_toml_str(
            r#"
[cors]
allowed_origins = ["not a url"]
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = AppConfig::from_toml_str("[server]\nport = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = AppConfig::from_toml_str("[server]\nmax_body_bytes = 10\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_log_format_is_a_parse_error() {
        let err = AppConfig::from_toml_str("[logging]\nformat = \"pretty\"\n").unwrap_err();
        assert!(matches!(err, SiteError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nhost = \"localhost\"\nport = 8181\n")
            .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.bind_address(), "localhost:8181");
    }
}
