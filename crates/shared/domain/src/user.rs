//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::{MIN_NAME_LENGTH, NAME_REQUIRED_MESSAGE};
use crate::error::{DomainError, DomainResult};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Age is optional (None = not provided)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

impl User {
    /// Create a user with an already assigned identifier.
    ///
    /// Rejects an empty name; identifiers are handed out by the store.
    pub fn new(id: Uuid, name: impl Into<String>, age: Option<i32>) -> DomainResult<Self> {
        let name = name.into();
        Self::validate_name(&name)?;
        Ok(Self { id, name, age })
    }

    /// Check that a name satisfies the "always present" invariant.
    pub fn validate_name(name: &str) -> DomainResult<()> {
        if name.chars().count() < MIN_NAME_LENGTH {
            return Err(DomainError::validation(NAME_REQUIRED_MESSAGE));
        }
        Ok(())
    }

    /// Update user's name
    pub fn update_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        Self::validate_name(&name)?;
        self.name = name;
        Ok(())
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateUser {
    /// User display name
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    /// Optional age
    pub age: Option<i32>,
}

impl CreateUser {
    pub fn new(name: impl Into<String>, age: Option<i32>) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// User rename data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateUser {
    /// Identifier of the user to rename
    pub id: Uuid,
    /// New display name
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
}

impl UpdateUser {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// User response (safe to return to client, id is not exposed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// User display name
    pub name: String,
    /// User age, `null` when absent
    pub age: Option<i32>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            age: user.age,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            age: user.age,
        }
    }
}
