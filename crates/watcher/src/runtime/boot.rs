//! Boot — logging init and configuration load.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::conf::WatchConfig;

/// Initialise the tracing / logging subsystem.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "watcher=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Load and validate the configuration.
pub fn boot() -> Result<WatchConfig, Box<dyn std::error::Error>> {
    info!("Starting Fishtail watcher v{}", env!("CARGO_PKG_VERSION"));

    let config = WatchConfig::load()?;
    if let Err(message) = config.validate() {
        return Err(message.into());
    }

    info!(
        "Loaded configuration: log_file={}, server_version={}, locale={}",
        config.log_file,
        if config.server_version.is_empty() { "unknown" } else { config.server_version.as_str() },
        config.locale
    );

    Ok(config)
}
