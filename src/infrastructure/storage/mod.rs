//! Storage infrastructure - SQLite pool and schema setup

mod sqlite;

pub use sqlite::SqliteStorage;
