//! Usuarios service CLI server
//!
//! Headless user-account REST service suitable for deployment
//! as a systemd service, Docker container, or standalone process.
//!
//! ```sh
//! # Run with default config (~/.config/usuarios-service/config.toml)
//! usuarios-service
//!
//! # Custom config path
//! usuarios-service --config /etc/usuarios-service/config.toml
//!
//! # Override the port
//! usuarios-service --api-port 8080
//!
//! # Validate config without starting
//! usuarios-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use usuarios::config::{AppConfig, DbType, CONFIG_ENV_VAR};
use usuarios::server::{init_tracing, ServerHandle, ServerOptions};

/// Usuarios service: user-account REST API.
#[derive(Parser, Debug)]
#[command(
    name = "usuarios-service",
    version,
    about = "REST service for user accounts",
    long_about = "Usuarios service: CRUD over /api/usuarios plus email and \
                  credential checks.\n\n\
                  Default config: ~/.config/usuarios-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
    api_port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(usuarios::default_config_path);

    let loaded = AppConfig::load(&config_path);

    // --check reports a bad file instead of falling back to defaults
    if cli.check {
        if let Err(e) = &loaded {
            eprintln!("Configuration is invalid: {}", e);
            std::process::exit(1);
        }
    }

    let mut config = match loaded {
        Ok(mut cfg) => {
            // Level override must land before tracing is initialized
            if let Some(ref level) = cli.log_level {
                cfg.logging.level = level.clone();
            }
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            let mut cfg = AppConfig::default();
            if let Some(ref level) = cli.log_level {
                cfg.logging.level = level.clone();
            }
            init_tracing(&cfg);
            error!("Failed to load config: {}", e);
            error!("Using default configuration.");
            cfg
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.api_port {
        info!("CLI override: api_port = {}", port);
        config.server.api_port = port;
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        if let Err(e) = config.validate() {
            eprintln!("Configuration is invalid: {}", e);
            std::process::exit(1);
        }
        let storage = match config.database.driver {
            DbType::Sqlite => config.database.connection_url(),
            DbType::Memory => "in-memory".to_string(),
        };
        println!("Configuration is valid");
        println!("   Config file  : {}", config_path.display());
        println!("   API address  : {}", config.api_address());
        println!("   Storage      : {}", storage);
        println!("   CORS origins : {}", config.cors.allowed_origins.join(", "));
        println!("   Log level    : {}", config.logging.level);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
