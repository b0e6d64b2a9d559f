//! Repository layer for data access.
//!
//! `UserRepository` is the storage seam: `UserStore` persists through
//! SeaORM, `MemoryUserStore` keeps records in process.

pub mod entities;
mod memory_repository;
mod user_repository;

pub use memory_repository::MemoryUserStore;
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
