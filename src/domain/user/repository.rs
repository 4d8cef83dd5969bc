//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewUser, User, UserChanges, UserId};
use crate::domain::DomainError;

/// Repository trait for user storage.
///
/// Implementations translate these calls into row operations and never apply
/// business validation; invalid data handed to them is stored as-is.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Insert a new row and return it with the store-assigned ID.
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Get a user by ID.
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Apply the given fields to an existing row and return the row as it was
    /// just written. Fails with NotFound when the row is absent.
    async fn update(&self, id: &UserId, changes: &UserChanges) -> Result<User, DomainError>;

    /// Permanently remove the row, regardless of any soft-delete marker.
    /// Returns whether a row was removed.
    async fn delete(&self, id: &UserId) -> Result<bool, DomainError>;

    /// Return every row, ordered by ID.
    async fn list(&self) -> Result<Vec<User>, DomainError>;
}
