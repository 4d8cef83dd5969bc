//! Infrastructure layer - storage, repositories, services and logging

pub mod logging;
pub mod storage;
pub mod user;
