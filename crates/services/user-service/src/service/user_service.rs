//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use common::{AppResult, OptionExt};
use domain::{CreateUser, UpdateUser, UserResponse};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate and store a new user
    async fn save_user(&self, request: CreateUser) -> AppResult<()>;

    /// Validate and store a batch of users; nothing is stored if any entry is invalid
    async fn save_users(&self, requests: Vec<CreateUser>) -> AppResult<()>;

    /// List every user as a response view
    async fn get_users(&self) -> AppResult<Vec<UserResponse>>;

    /// Rename the user identified by `request.id`
    async fn update_user_name(&self, request: UpdateUser) -> AppResult<()>;

    /// Delete one user with the given name
    async fn delete_user(&self, name: &str) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn save_user(&self, request: CreateUser) -> AppResult<()> {
        request.validate()?;

        let user = self.repo.create(request.name, request.age).await?;
        tracing::debug!(user_id = %user.id, "User created");
        Ok(())
    }

    async fn save_users(&self, requests: Vec<CreateUser>) -> AppResult<()> {
        for request in &requests {
            request.validate()?;
        }

        let created = self.repo.create_many(requests).await?;
        tracing::debug!(count = created.len(), "Users created");
        Ok(())
    }

    async fn get_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.repo.list().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn update_user_name(&self, request: UpdateUser) -> AppResult<()> {
        request.validate()?;

        let mut user = self.repo.find_by_id(request.id).await?.ok_or_not_found()?;
        user.update_name(request.name)?;

        self.repo.update(user).await?;
        tracing::debug!(user_id = %request.id, "User renamed");
        Ok(())
    }

    async fn delete_user(&self, name: &str) -> AppResult<()> {
        self.repo.delete_by_name(name).await?;
        tracing::debug!(name, "User deleted");
        Ok(())
    }
}
