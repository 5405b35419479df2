//! Compliments CLI - run and inspect the compliment service

use clap::{Parser, Subcommand};
use compliments::config;
use compliments::server;
use compliments::storage::ComplimentStore;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "compliments")]
#[command(version = "0.1.0")]
#[command(about = "A tiny HTTP API for storing and sharing compliments")]
#[command(long_about = r#"
Compliments stores short messages of appreciation and serves them over HTTP:
  • GET  /            liveness banner
  • GET  /compliment  the most recent compliment
  • POST /compliment  submit a new one

Example usage:
  compliments serve --port 5000
  compliments init --database compliments.db
  compliments stats
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "5000")]
        port: u16,

        /// Path to the database file
        #[arg(short, long, default_value_os_t = config::default_database_path())]
        database: PathBuf,
    },

    /// Create the database and schema, then exit
    Init {
        /// Path to the database file
        #[arg(short, long, default_value_os_t = config::default_database_path())]
        database: PathBuf,
    },

    /// Show how many compliments are stored
    Stats {
        /// Path to the database file
        #[arg(short, long, default_value_os_t = config::default_database_path())]
        database: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Serve {
            host,
            port,
            database,
        } => {
            config::ensure_db_dir(&database)?;
            // The schema must exist before the first request arrives.
            ComplimentStore::open(&database)?;
            tracing::info!("Database ready at {:?}", database);

            server::start_server(&host, port, database).await?;
        }

        Commands::Init { database } => {
            config::ensure_db_dir(&database)?;
            ComplimentStore::open(&database)?;
            println!("✅ Database initialized at {:?}", database);
        }

        Commands::Stats { database } => {
            let store = ComplimentStore::open(&database)?;
            let count = store.count_compliments()?;
            println!("📊 Compliments stored in {:?}: {}", database, count);
        }
    }

    Ok(())
}
