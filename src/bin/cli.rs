//! Chirpy CLI
//!
//! Reads and writes the database file directly, without the server.

use clap::{Parser, Subcommand};
use chirpy::moderation::ContentFilter;
use chirpy::{Config, Database};
use tracing_subscriber::{fmt, EnvFilter};

/// Chirpy CLI
#[derive(Parser, Debug)]
#[command(name = "chirpy-cli")]
#[command(about = "CLI for the Chirpy database file")]
struct Args {
    /// Database file
    #[arg(short, long, default_value = "database.json")]
    db: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every chirp as JSON, sorted by id
    List,

    /// Validate, clean and store a chirp
    Create {
        /// The chirp text
        body: String,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> chirpy::Result<()> {
    let config = Config::builder().db_path(&args.db).build();
    let db = Database::open(&config.db_path)?;

    match args.command {
        Commands::List => {
            let mut chirps = db.list_chirps()?;
            chirps.sort_by_key(|chirp| chirp.id);
            println!("{}", serde_json::to_string_pretty(&chirps)?);
        }
        Commands::Create { body } => {
            let cleaned = ContentFilter::from_config(&config).moderate(&body)?;
            let chirp = db.create_chirp(&cleaned)?;
            println!("{}", serde_json::to_string_pretty(&chirp)?);
        }
    }

    Ok(())
}
