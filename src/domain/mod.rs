//! Domain layer - entities, validation rules and repository traits

mod error;
pub mod user;

pub use error::DomainError;
