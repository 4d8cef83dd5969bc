//! SQLite storage initializer
//!
//! Opens (creating if absent) the file-backed store and ensures the `users`
//! table schema exists. Schema setup is idempotent and safe on every start.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::domain::DomainError;

/// File-backed SQLite storage
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Open the SQLite file at `path`, creating it if missing.
    pub async fn connect(path: &Path) -> Result<Self, DomainError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to open database: {}", e)))?;

        info!("Opened SQLite database at {}", path.display());

        Ok(Self { pool })
    }

    /// Open an in-memory database. A single connection keeps the database
    /// alive for the lifetime of the pool.
    pub async fn connect_in_memory() -> Result<Self, DomainError> {
        let options = SqliteConnectOptions::new().in_memory(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| {
                DomainError::storage(format!("Failed to open in-memory database: {}", e))
            })?;

        Ok(Self { pool })
    }

    /// Get the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Ensure the `users` table exists. Idempotent.
    pub async fn run_migrations(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                surname TEXT NOT NULL,
                age INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                deleted_at TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create users table: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let storage = SqliteStorage::connect_in_memory().await.unwrap();

        storage.run_migrations().await.unwrap();
        storage.run_migrations().await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(storage.pool())
            .await
            .unwrap();

        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_connect_creates_file() {
        let dir = std::env::temp_dir().join("user-service-storage-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("create-test.db");
        let _ = std::fs::remove_file(&path);

        let storage = SqliteStorage::connect(&path).await.unwrap();
        storage.run_migrations().await.unwrap();

        assert!(path.exists());

        drop(storage);
        let _ = std::fs::remove_file(&path);
    }
}
