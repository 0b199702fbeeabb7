//! Movie catalog - CLI server
//!
//! ```sh
//! # Run with default config (~/.config/movie-catalog/config.toml)
//! movie-catalog
//!
//! # Custom config path, load sample data into an empty database
//! movie-catalog --config /etc/movie-catalog/config.toml --seed data/movies.sample.json
//!
//! # Validate config without starting
//! movie-catalog --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use movie_catalog::config::AppConfig;
use movie_catalog::server::{init_tracing, ServerHandle, ServerOptions};

/// Read-only movie catalog REST server.
#[derive(Parser, Debug)]
#[command(
    name = "movie-catalog",
    version,
    about = "Paginated read-only movie catalog API",
    long_about = "Movie catalog - REST API serving a paginated movie listing \
                  and movie details from a SQL database.\n\n\
                  Default config: ~/.config/movie-catalog/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "MOVIE_CATALOG_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen host.
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the database URL.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// JSON file of movies to load when the catalog is empty.
    #[arg(long)]
    seed: Option<PathBuf>,

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
    let config_path = cli
        .config
        .unwrap_or_else(movie_catalog::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(seed) = cli.seed {
        config.database.seed_file = Some(seed);
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        if let Some(e) = load_error {
            eprintln!("Configuration is invalid: {}", e);
            std::process::exit(1);
        }
        config.validate()?;
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Address     : {}", config.server.address());
        println!("   Database    : {}", config.database.connection_url());
        if let Some(seed) = &config.database.seed_file {
            println!("   Seed file   : {}", seed.display());
        }
        println!("   Page size   : {}", config.pagination.default_per_page);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
