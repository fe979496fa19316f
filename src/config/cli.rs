use crate::config::{AppConfig, LogFormat};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "g3-backoffice")]
#[command(about = "Content and submissions API for the G3 website")]
pub struct CliConfig {
    #[arg(long, env = "G3_CONFIG", help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "G3_HOST")]
    pub host: Option<String>,

    #[arg(long, env = "G3_PORT")]
    pub port: Option<u16>,

    #[arg(long, env = "G3_FIXTURE", help = "Demo submissions JSON file")]
    pub fixture: Option<String>,

    #[arg(long, help = "Start with empty submission lists")]
    pub no_seed: bool,

    #[arg(long, value_enum, env = "G3_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, then the TOML file, then flags.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(fixture) = &self.fixture {
            config.data.fixture_path = Some(fixture.clone());
        }
        if self.no_seed {
            config.data.seed_fixture = false;
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }

        Ok(config)
    }
}
