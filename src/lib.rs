//! User CRUD service
//!
//! A small JSON HTTP API exposing create/read/update/delete/list operations for
//! a single `User` resource, backed by a local SQLite file. Layers:
//!
//! - `api` - HTTP handlers, router and error mapping
//! - `infrastructure::user` - user service (business validation) and repositories
//! - `infrastructure::storage` - SQLite pool and schema setup
//! - `domain` - entities, validation rules and the repository trait

use std::path::Path;
use std::sync::Arc;

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use api::AppState;
use config::AppConfig;
use infrastructure::storage::SqliteStorage;
use infrastructure::user::{SqliteUserRepository, UserService};

/// Build the application state from configuration: open the store, ensure the
/// schema exists, and wire repository -> service -> state.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage = SqliteStorage::connect(Path::new(&config.database.path)).await?;
    storage.run_migrations().await?;

    let repository = Arc::new(SqliteUserRepository::new(storage.pool().clone()));
    let user_service = Arc::new(UserService::new(repository));

    Ok(AppState::new(user_service))
}
