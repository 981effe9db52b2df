//! Videoshop CLI - Database migrations, demo data and customer management.
//!
//! # Usage
//!
//! ```bash
//! # Apply storefront database migrations
//! vs-cli migrate
//!
//! # Seed the demo administrator and customers (skipped if already present)
//! vs-cli seed
//!
//! # Show what seeding would create, without touching the database
//! vs-cli seed --dry-run
//!
//! # List and register customers
//! vs-cli customers list
//! vs-cli customers register -u rita -p hunter22 -a "Bay Harbor"
//! ```
//!
//! # Logging
//!
//! `RUST_LOG` overrides the default filter. Set `LOG_FORMAT=json` for
//! structured output.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::CommandError;

#[derive(Parser)]
#[command(name = "vs-cli")]
#[command(author, version, about = "Videoshop CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Populate demo accounts and customers
    Seed {
        /// Seed in-memory stores instead of the database
        #[arg(long)]
        dry_run: bool,
    },
    /// Manage customers
    Customers {
        #[command(subcommand)]
        action: CustomerAction,
    },
}

#[derive(Subcommand)]
enum CustomerAction {
    /// List all customers
    List,
    /// Register a new customer
    Register {
        /// Login name
        #[arg(short, long)]
        username: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Delivery address
        #[arg(short, long)]
        address: String,
    },
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "videoshop_storefront=info,videoshop_cli=info".into());

    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json");
    let json_layer = json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!json).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { dry_run } => commands::seed::demo_data(dry_run).await?,
        Commands::Customers { action } => match action {
            CustomerAction::List => commands::customers::list().await?,
            CustomerAction::Register {
                username,
                password,
                address,
            } => commands::customers::register(&username, password, &address).await?,
        },
    }
    Ok(())
}
