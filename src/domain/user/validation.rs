//! User field validation

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("surname cannot be empty")]
    EmptySurname,

    #[error("age must be greater than zero, got {0}")]
    NonPositiveAge(i64),

    #[error("user ID must be greater than zero, got {0}")]
    NonPositiveId(i64),
}

/// Validate a user's name. It must not be empty.
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if name.is_empty() {
        return Err(UserValidationError::EmptyName);
    }

    Ok(())
}

/// Validate a user's surname. It must not be empty.
pub fn validate_surname(surname: &str) -> Result<(), UserValidationError> {
    if surname.is_empty() {
        return Err(UserValidationError::EmptySurname);
    }

    Ok(())
}

/// Validate a user's age. It must be greater than zero.
pub fn validate_age(age: i64) -> Result<(), UserValidationError> {
    if age <= 0 {
        return Err(UserValidationError::NonPositiveAge(age));
    }

    Ok(())
}

/// Validate a user ID. Store-assigned IDs are always greater than zero.
pub fn validate_user_id(id: i64) -> Result<(), UserValidationError> {
    if id <= 0 {
        return Err(UserValidationError::NonPositiveId(id));
    }

    Ok(())
}
