//! User CRUD service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request      ┌───────────────────────────────────────────────┐
//!     ────────────────────┼─▶ http/server   ─▶ http/request ─▶ handlers  │
//!                         │   (middleware)      (extractors)     │        │
//!                         │                                      ▼        │
//!     Client Response     │                               ┌────────────┐  │
//!     ◀───────────────────┼── http/response ◀─────────────│ UserStore  │  │
//!                         │   (ApiError → JSON)           │ Mutex<map> │  │
//!                         │                               └────────────┘  │
//!                         │  config · observability · lifecycle           │
//!                         └───────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;

use user_service::config::{parse_config, validate_config, ConfigError, ServiceConfig};
use user_service::lifecycle::{signals, startup, Shutdown};
use user_service::observability::logging;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "In-memory user CRUD service", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override observability.log_level.
    #[arg(long)]
    log_level: Option<String>,
}

/// Merge the config file (if any) with CLI overrides, then validate once.
fn resolve_config(cli: &Cli) -> Result<ServiceConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => parse_config(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
    }
    if let Some(level) = &cli.log_level {
        config.observability.log_level = level.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    logging::init(&config.observability);
    tracing::info!("user-service v{} starting", env!("CARGO_PKG_VERSION"));

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::trigger_on_signal(&shutdown).await;
    });

    startup::run(config, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_override_fixes_invalid_file_value() {
        let file = config_file(
            r#"
            [listener]
            bind_address = "nowhere"

            [observability]
            log_level = "loud"
            "#,
        );

        let cli = Cli::parse_from([
            "user-service",
            "--config",
            file.path().to_str().unwrap(),
            "--bind",
            "127.0.0.1:9090",
            "--log-level",
            "warn",
        ]);

        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9090");
        assert_eq!(config.observability.log_level, "warn");
    }

    #[test]
    fn test_invalid_override_rejected() {
        let cli = Cli::parse_from(["user-service", "--bind", "nowhere"]);
        assert!(matches!(
            resolve_config(&cli),
            Err(ConfigError::Validation(_))
        ));
    }
}
