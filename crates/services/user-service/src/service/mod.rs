//! Application services layer - Use cases over the user repository.

mod user_service;

pub use user_service::{UserManager, UserService};
