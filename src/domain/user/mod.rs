//! User domain
//!
//! Domain types for the User resource: the entity itself, the input shapes used
//! to create and patch it, field validation, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{NewUser, User, UserChanges, UserId};
pub use repository::UserRepository;
pub use validation::{
    validate_age, validate_name, validate_surname, validate_user_id, UserValidationError,
};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
