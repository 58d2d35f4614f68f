//! Chirpy Server Binary
//!
//! Starts the HTTP server for Chirpy.

use clap::Parser;
use chirpy::api::{AppState, Server};
use chirpy::Config;
use tracing_subscriber::{fmt, EnvFilter};

/// Chirpy Server
#[derive(Parser, Debug)]
#[command(name = "chirpy-server")]
#[command(about = "Chirp service backed by a JSON file database")]
#[command(version)]
struct Args {
    /// Database file
    #[arg(short, long, default_value = "database.json")]
    db: String,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    listen: String,

    /// Directory served under /app/
    #[arg(long, default_value = ".")]
    app_dir: String,

    /// Directory served under /assets/
    #[arg(long, default_value = "./assets")]
    assets_dir: String,

    /// Maximum chirp length in characters
    #[arg(short, long, default_value = "140")]
    max_chirp_length: usize,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,chirpy=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("Chirpy Server v{}", chirpy::VERSION);
    tracing::info!("Database: {}", args.db);
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let config = Config::builder()
        .db_path(&args.db)
        .listen_addr(&args.listen)
        .app_dir(&args.app_dir)
        .assets_dir(&args.assets_dir)
        .max_chirp_length(args.max_chirp_length)
        .build();

    // Open database
    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to open database: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Database initialized successfully");

    let server = Server::new(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
