//! User infrastructure - repositories and service

mod repository;
mod service;
mod sqlite_repository;

pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UpdateUserRequest, UserService};
pub use sqlite_repository::SqliteUserRepository;
