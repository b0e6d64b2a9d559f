//! User Service - command-line front end for user management.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use user_service_lib::config::UserServiceConfig;
use user_service_lib::{MigrateAction, UserCommand};

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User management service")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// Create a user
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: Option<i32>,
    },
    /// List all users
    List {
        /// Print users as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rename the user with the given id
    Rename { id: Uuid, name: String },
    /// Delete a user by name
    Delete { name: String },
    /// Delete every user
    Purge,
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = UserServiceConfig::from_env();
    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            user_service_lib::run_migrations(&config, migrate_action).await?;
        }
        Commands::Create { name, age } => {
            user_service_lib::run_user_command(&config, UserCommand::Create { name, age }).await?;
        }
        Commands::List { json } => {
            user_service_lib::run_user_command(&config, UserCommand::List { json }).await?;
        }
        Commands::Rename { id, name } => {
            user_service_lib::run_user_command(&config, UserCommand::Rename { id, name }).await?;
        }
        Commands::Delete { name } => {
            user_service_lib::run_user_command(&config, UserCommand::Delete { name }).await?;
        }
        Commands::Purge => {
            user_service_lib::run_user_command(&config, UserCommand::Purge).await?;
        }
    }

    Ok(())
}

/// Initialize tracing subscriber (verbose mode sets debug level)
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
