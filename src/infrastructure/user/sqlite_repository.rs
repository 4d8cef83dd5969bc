//! SQLite user repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

use crate::domain::user::{NewUser, User, UserChanges, UserId, UserRepository};
use crate::domain::DomainError;

/// SQLite implementation of UserRepository
#[derive(Debug, Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (name, surname, age, created_at, updated_at, deleted_at)
            VALUES (?1, ?2, ?3, ?4, ?5, NULL)
            "#,
        )
        .bind(&user.name)
        .bind(&user.surname)
        .bind(user.age)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create user: {}", e)))?;

        let id = UserId::new(result.last_insert_rowid())
            .map_err(|e| DomainError::storage(format!("Invalid row ID from insert: {}", e)))?;

        Ok(User::from_record(
            id,
            user.name,
            user.surname,
            user.age,
            user.created_at,
            user.updated_at,
            None,
        ))
    }

    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, surname, age, created_at, updated_at, deleted_at
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, id: &UserId, changes: &UserChanges) -> Result<User, DomainError> {
        // Lookup first so a missing row is NotFound rather than a no-op write.
        if self.get(id).await?.is_none() {
            return Err(DomainError::not_found(format!("User '{}' not found", id)));
        }

        sqlx::query(
            r#"
            UPDATE users
            SET name = ?2, surname = ?3, age = ?4, updated_at = ?5
            WHERE id = ?1
            "#,
        )
        .bind(id.as_i64())
        .bind(&changes.name)
        .bind(&changes.surname)
        .bind(changes.age)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update user: {}", e)))?;

        // Re-read so the returned row reflects the just-written state.
        self.get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        // Unscoped delete: removes the row even if deleted_at is set.
        let result = sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, surname, age, created_at, updated_at, deleted_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        let mut users = Vec::with_capacity(rows.len());

        for row in rows {
            users.push(row_to_user(&row)?);
        }

        Ok(users)
    }
}

fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> Result<User, DomainError> {
    let id: i64 = row.get("id");
    let name: String = row.get("name");
    let surname: String = row.get("surname");
    let age: i64 = row.get("age");
    let created_at: DateTime<Utc> = row.get("created_at");
    let updated_at: DateTime<Utc> = row.get("updated_at");
    let deleted_at: Option<DateTime<Utc>> = row.get("deleted_at");

    let user_id = UserId::new(id)
        .map_err(|e| DomainError::storage(format!("Invalid user ID in database: {}", e)))?;

    Ok(User::from_record(
        user_id, name, surname, age, created_at, updated_at, deleted_at,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::SqliteStorage;

    async fn create_repository() -> SqliteUserRepository {
        let storage = SqliteStorage::connect_in_memory().await.unwrap();
        storage.run_migrations().await.unwrap();
        SqliteUserRepository::new(storage.pool().clone())
    }

    #[tokio::test]
    async fn test_create_assigns_positive_id() {
        let repo = create_repository().await;

        let user = repo.create(NewUser::new("Ann", "Lee", 30)).await.unwrap();

        assert!(user.id().as_i64() > 0);
        assert_eq!(user.name(), "Ann");
        assert_eq!(user.surname(), "Lee");
        assert_eq!(user.age(), 30);
        assert!(user.deleted_at().is_none());
    }

    #[tokio::test]
    async fn test_create_then_get_returns_matching_fields() {
        let repo = create_repository().await;

        let created = repo.create(NewUser::new("Ann", "Lee", 30)).await.unwrap();

        let fetched = repo.get(&created.id()).await.unwrap().unwrap();
        assert_eq!(fetched.id(), created.id());
        assert_eq!(fetched.name(), "Ann");
        assert_eq!(fetched.surname(), "Lee");
        assert_eq!(fetched.age(), 30);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = create_repository().await;

        let result = repo.get(&UserId::new(42).unwrap()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_returns_written_state() {
        let repo = create_repository().await;

        let created = repo.create(NewUser::new("Ann", "Lee", 30)).await.unwrap();

        let changes = UserChanges {
            name: "Ann".to_string(),
            surname: "Lee".to_string(),
            age: 31,
        };

        let updated = repo.update(&created.id(), &changes).await.unwrap();
        assert_eq!(updated.age(), 31);
        assert!(updated.updated_at() >= created.updated_at());

        let fetched = repo.get(&created.id()).await.unwrap().unwrap();
        assert_eq!(fetched.age(), 31);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = create_repository().await;

        let changes = UserChanges {
            name: "Ann".to_string(),
            surname: "Lee".to_string(),
            age: 31,
        };

        let result = repo.update(&UserId::new(42).unwrap(), &changes).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let repo = create_repository().await;

        let created = repo.create(NewUser::new("Ann", "Lee", 30)).await.unwrap();

        let deleted = repo.delete(&created.id()).await.unwrap();
        assert!(deleted);

        let fetched = repo.get(&created.id()).await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let repo = create_repository().await;

        let deleted = repo.delete(&UserId::new(42).unwrap()).await.unwrap();
        assert!(!deleted);
    }

    #[tokio::test]
    async fn test_delete_ignores_soft_delete_marker() {
        let repo = create_repository().await;

        let created = repo.create(NewUser::new("Ann", "Lee", 30)).await.unwrap();

        // Mark the row soft-deleted out of band; delete must still remove it.
        sqlx::query("UPDATE users SET deleted_at = ?2 WHERE id = ?1")
            .bind(created.id().as_i64())
            .bind(Utc::now())
            .execute(&repo.pool)
            .await
            .unwrap();

        let deleted = repo.delete(&created.id()).await.unwrap();
        assert!(deleted);
    }

    #[tokio::test]
    async fn test_list_ordered_by_id() {
        let repo = create_repository().await;

        repo.create(NewUser::new("Ann", "Lee", 30)).await.unwrap();
        repo.create(NewUser::new("Bea", "Kim", 41)).await.unwrap();
        repo.create(NewUser::new("Cal", "Roe", 52)).await.unwrap();

        let users = repo.list().await.unwrap();
        assert_eq!(users.len(), 3);

        let ids: Vec<i64> = users.iter().map(|u| u.id().as_i64()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let repo = create_repository().await;

        let users = repo.list().await.unwrap();
        assert!(users.is_empty());
    }
}
