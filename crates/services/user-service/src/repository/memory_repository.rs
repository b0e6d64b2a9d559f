//! In-process user repository.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{CreateUser, User};

use super::UserRepository;

/// UserRepository keeping records in insertion order in memory.
///
/// Suitable for tests and for embedding the service without a database.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserStore {
    async fn create(&self, name: String, age: Option<i32>) -> AppResult<User> {
        let user = User::new(Uuid::new_v4(), name, age)?;
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn create_many(&self, users: Vec<CreateUser>) -> AppResult<Vec<User>> {
        let created = users
            .into_iter()
            .map(|CreateUser { name, age }| User::new(Uuid::new_v4(), name, age))
            .collect::<Result<Vec<_>, _>>()?;

        self.users.write().await.extend(created.iter().cloned());
        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.name == name).cloned())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn update(&self, user: User) -> AppResult<User> {
        User::validate_name(&user.name)?;

        let mut users = self.users.write().await;
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(AppError::NotFound)?;
        *slot = user.clone();
        Ok(user)
    }

    async fn delete_by_name(&self, name: &str) -> AppResult<()> {
        let mut users = self.users.write().await;
        let index = users
            .iter()
            .position(|u| u.name == name)
            .ok_or(AppError::NotFound)?;
        users.remove(index);
        Ok(())
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let mut users = self.users.write().await;
        let removed = users.len() as u64;
        users.clear();
        Ok(removed)
    }
}
