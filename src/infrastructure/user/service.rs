//! User service - business validation in front of the repository

use std::sync::Arc;

use crate::domain::user::{
    validate_age, validate_name, validate_surname, NewUser, User, UserChanges, UserId,
    UserRepository,
};
use crate::domain::DomainError;

/// Request for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub surname: String,
    pub age: i64,
}

/// Request for updating a user. All three fields are required; there are no
/// partial updates.
#[derive(Debug, Clone)]
pub struct UpdateUserRequest {
    pub name: String,
    pub surname: String,
    pub age: i64,
}

/// User service. Validates input fields before delegating to the repository;
/// the repository itself never validates.
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new user after validating its fields.
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        validate_fields(&request.name, &request.surname, request.age)?;

        self.repository
            .create(NewUser::new(request.name, request.surname, request.age))
            .await
    }

    /// Update an existing user after validating the incoming fields.
    pub async fn update(&self, id: i64, request: UpdateUserRequest) -> Result<User, DomainError> {
        let user_id = parse_id(id)?;

        validate_fields(&request.name, &request.surname, request.age)?;

        let changes = UserChanges {
            name: request.name,
            surname: request.surname,
            age: request.age,
        };

        self.repository.update(&user_id, &changes).await
    }

    /// Get a user by ID.
    pub async fn get(&self, id: i64) -> Result<Option<User>, DomainError> {
        let user_id = parse_id(id)?;
        self.repository.get(&user_id).await
    }

    /// Permanently delete a user by ID. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let user_id = parse_id(id)?;
        self.repository.delete(&user_id).await
    }

    /// List all users.
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await
    }
}

fn parse_id(id: i64) -> Result<UserId, DomainError> {
    UserId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))
}

fn validate_fields(name: &str, surname: &str, age: i64) -> Result<(), DomainError> {
    validate_name(name).map_err(|e| DomainError::validation(e.to_string()))?;
    validate_surname(surname).map_err(|e| DomainError::validation(e.to_string()))?;
    validate_age(age).map_err(|e| DomainError::validation(e.to_string()))?;
    Ok(())
}
