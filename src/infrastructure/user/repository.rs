//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{NewUser, User, UserChanges, UserId, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository, used in tests and as a
/// storage-free fallback. IDs are assigned from a monotonic counter, matching
/// the store-assigned semantics of the SQLite implementation.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<i64, User>>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user_id = UserId::new(id).map_err(|e| DomainError::internal(e.to_string()))?;

        let user = User::from_record(
            user_id,
            user.name,
            user.surname,
            user.age,
            user.created_at,
            user.updated_at,
            None,
        );

        self.users.write().await.insert(id, user.clone());

        Ok(user)
    }

    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id.as_i64()).cloned())
    }

    async fn update(&self, id: &UserId, changes: &UserChanges) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        let user = users
            .get_mut(&id.as_i64())
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        user.apply(changes);

        Ok(user.clone())
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id.as_i64()).is_some())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        // BTreeMap iteration yields ascending ID order.
        Ok(users.values().cloned().collect())
    }
}
