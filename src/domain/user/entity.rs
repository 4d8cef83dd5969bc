//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_user_id, UserValidationError};

/// User identifier - a store-assigned positive integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    /// Create a new UserId after validation
    pub fn new(id: i64) -> Result<Self, UserValidationError> {
        validate_user_id(id)?;
        Ok(Self(id))
    }

    /// Get the inner integer value
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for UserId {
    type Error = UserValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User entity - the sole domain resource of this service.
///
/// The schema carries a soft-delete marker (`deleted_at`) but the delete
/// operation removes the row permanently; the marker is kept for parity with
/// the stored schema.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    name: String,
    surname: String,
    age: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Rehydrate a user from stored fields.
    pub fn from_record(
        id: UserId,
        name: impl Into<String>,
        surname: impl Into<String>,
        age: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            surname: surname.into(),
            age,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    // Mutators

    /// Apply a patch of name/surname/age and bump the update timestamp.
    pub fn apply(&mut self, changes: &UserChanges) {
        self.name = changes.name.clone();
        self.surname = changes.surname.clone();
        self.age = changes.age;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Input shape for creating a user; the ID is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub age: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(name: impl Into<String>, surname: impl Into<String>, age: i64) -> Self {
        let now = Utc::now();

        Self {
            name: name.into(),
            surname: surname.into(),
            age,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Patch shape for updating a user. All three fields are required; partial
/// updates are not supported.
#[derive(Debug, Clone)]
pub struct UserChanges {
    pub name: String,
    pub surname: String,
    pub age: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(id: i64) -> User {
        let now = Utc::now();
        User::from_record(
            UserId::new(id).unwrap(),
            "Ann",
            "Lee",
            30,
            now,
            now,
            None,
        )
    }

    #[test]
    fn test_user_id_valid() {
        let id = UserId::new(7).unwrap();
        assert_eq!(id.as_i64(), 7);
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn test_user_id_invalid() {
        assert!(UserId::new(0).is_err());
        assert!(UserId::new(-3).is_err());
    }

    #[test]
    fn test_user_id_serde() {
        let id: UserId = serde_json::from_str("5").unwrap();
        assert_eq!(id.as_i64(), 5);
        assert_eq!(serde_json::to_string(&id).unwrap(), "5");

        assert!(serde_json::from_str::<UserId>("0").is_err());
        assert!(serde_json::from_str::<UserId>("-1").is_err());
    }

    #[test]
    fn test_user_getters() {
        let user = create_test_user(1);

        assert_eq!(user.id().as_i64(), 1);
        assert_eq!(user.name(), "Ann");
        assert_eq!(user.surname(), "Lee");
        assert_eq!(user.age(), 30);
        assert!(user.deleted_at().is_none());
    }

    #[test]
    fn test_apply_changes() {
        let mut user = create_test_user(1);
        let created = user.created_at();
        let before = user.updated_at();

        std::thread::sleep(std::time::Duration::from_millis(10));

        user.apply(&UserChanges {
            name: "Bea".to_string(),
            surname: "Kim".to_string(),
            age: 41,
        });

        assert_eq!(user.name(), "Bea");
        assert_eq!(user.surname(), "Kim");
        assert_eq!(user.age(), 41);
        assert!(user.updated_at() > before);
        assert_eq!(user.created_at(), created);
    }

    #[test]
    fn test_new_user_timestamps() {
        let new_user = NewUser::new("Ann", "Lee", 30);
        assert_eq!(new_user.created_at, new_user.updated_at);
    }
}
