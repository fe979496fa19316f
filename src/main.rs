use clap::Parser;
use g3_backoffice::utils::{logger, validation::Validate};
use g3_backoffice::{http, AppState, CliConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // Logging
    logger::init_logger(&config.logging.level, config.logging.format, cli.verbose);

    tracing::info!("Starting g3-backoffice");
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    // Settings
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::warn!("Admin content route has no authentication in this configuration");

    let state = AppState::from_config(&config)?;
    http::serve(&config, state).await?;

    Ok(())
}
