//! User repository trait and its SeaORM implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{CreateUser, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every write path enforces the non-empty name rule, so callers that skip
/// the service layer still cannot persist an invalid record.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user with a freshly assigned id
    async fn create(&self, name: String, age: Option<i32>) -> AppResult<User>;

    /// Create several users at once; either all of them are stored or none
    async fn create_many(&self, users: Vec<CreateUser>) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find the first user with the given name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<User>>;

    /// List all users, in no particular order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Write back the mutable fields of an existing user
    async fn update(&self, user: User) -> AppResult<User>;

    /// Delete one user matching `name`
    async fn delete_by_name(&self, name: &str) -> AppResult<()>;

    /// Delete every user, returning how many were removed
    async fn delete_all(&self) -> AppResult<u64>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn new_active_model(name: String, age: Option<i32>) -> ActiveModel {
    ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        age: Set(age),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, name: String, age: Option<i32>) -> AppResult<User> {
        User::validate_name(&name)?;

        let model = new_active_model(name, age)
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn create_many(&self, users: Vec<CreateUser>) -> AppResult<Vec<User>> {
        // Reject the whole batch before touching the database
        for request in &users {
            User::validate_name(&request.name)?;
        }

        let txn = self.db.begin().await.map_err(AppError::from)?;

        let result = async {
            let mut created = Vec::with_capacity(users.len());
            for CreateUser { name, age } in users {
                let model = new_active_model(name, age).insert(&txn).await?;
                created.push(User::from(model));
            }
            Ok::<_, AppError>(created)
        }
        .await;

        match result {
            Ok(created) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(created)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn update(&self, user: User) -> AppResult<User> {
        User::validate_name(&user.name)?;

        let existing = UserEntity::find_by_id(user.id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(user.name);
        active.age = Set(user.age);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn delete_by_name(&self, name: &str) -> AppResult<()> {
        // Names are not unique; the first row the database hands back goes
        let model = UserEntity::find()
            .filter(user::Column::Name.eq(name))
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        UserEntity::delete_by_id(model.id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = UserEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }
}
