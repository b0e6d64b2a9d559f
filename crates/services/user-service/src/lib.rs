//! User Service Library
//!
//! This crate provides user management over a pluggable repository:
//! SeaORM-backed storage for production and an in-memory store for tests.
//! The bundled binary drives it from the command line.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use common::AppError;
use domain::{CreateUser, UpdateUser};

use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::{UserRepository, UserStore};
use crate::service::{UserManager, UserService};

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// User operation requested from the command line.
#[derive(Debug, Clone)]
pub enum UserCommand {
    Create { name: String, age: Option<i32> },
    List { json: bool },
    Rename { id: Uuid, name: String },
    Delete { name: String },
    Purge,
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &UserServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Run a single user operation against the configured database.
pub async fn run_user_command(
    config: &UserServiceConfig,
    command: UserCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;

    let user_repo = Arc::new(UserStore::new(db.get_connection()));
    let user_service = UserManager::new(user_repo.clone());

    execute(&user_service, &*user_repo, command)
        .await
        .map_err(|e| e.user_message().into())
}

async fn execute(
    service: &dyn UserService,
    repo: &dyn UserRepository,
    command: UserCommand,
) -> Result<(), AppError> {
    match command {
        UserCommand::Create { name, age } => {
            service.save_user(CreateUser::new(name, age)).await?;
            info!("User created");
        }
        UserCommand::List { json } => {
            let users = service.get_users().await?;
            if json {
                let body = serde_json::to_string_pretty(&users)
                    .map_err(|e| AppError::internal(e.to_string()))?;
                println!("{}", body);
            } else {
                for user in users {
                    let age = user.age.map_or_else(|| "-".to_string(), |a| a.to_string());
                    println!("{}\t{}", user.name, age);
                }
            }
        }
        UserCommand::Rename { id, name } => {
            service.update_user_name(UpdateUser::new(id, name)).await?;
            info!(%id, "User renamed");
        }
        UserCommand::Delete { name } => {
            service.delete_user(&name).await?;
            info!("User deleted");
        }
        UserCommand::Purge => {
            let removed = repo.delete_all().await?;
            info!(removed, "All users deleted");
        }
    }

    Ok(())
}
