use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::users::repo_types::User;

pub const USER_REQUIRED_FIELDS: &str = "Name and age are required!";
pub const USER_NOT_FOUND: &str = "User not found!";

/// Request body for `POST /users/`. Presence is checked by [`CreateUserRequest::validate`].
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
}

/// A create request that passed the presence checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub age: i64,
}

impl CreateUserRequest {
    /// An empty name and a zero age count as missing.
    pub fn validate(self) -> ApiResult<NewUser> {
        match (self.name, self.age) {
            (Some(name), Some(age)) if !name.is_empty() && age != 0 => Ok(NewUser { name, age }),
            _ => Err(ApiError::BadRequest(USER_REQUIRED_FIELDS.into())),
        }
    }
}

/// Request body for `PUT /users/`. Absent `name`/`age` are written as NULL.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteUserRequest {
    #[serde(default)]
    pub id: Option<i64>,
}

/// Public projection of a user; `active` is never exposed.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PublicUser {
    pub id: i64,
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            age: u.age,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub message: &'static str,
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
