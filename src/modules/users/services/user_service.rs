use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::users::models::{CreateUserRequest, UpdateUserRequest, User, UserResponse};
use crate::modules::users::repositories::UserRepository;

/// Service for user request orchestration
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn list_users(&self) -> Result<Vec<UserResponse>> {
        let users = self.users.list().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_user(&self, id: i64) -> Result<UserResponse> {
        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User not found: {}", id)))?;

        Ok(UserResponse::from(user))
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> Result<UserResponse> {
        let user = self.users.create(&request.name, &request.email).await?;

        Ok(UserResponse::from(user))
    }

    /// Overwrites name and email unconditionally; id and created_at are untouched.
    pub async fn update_user(&self, id: i64, request: UpdateUserRequest) -> Result<UserResponse> {
        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User not found: {}", id)))?;

        self.users.update(id, &request.name, &request.email).await?;

        Ok(UserResponse::from(User {
            name: request.name,
            email: request.email,
            ..user
        }))
    }

    pub async fn delete_user(&self, id: i64) -> Result<()> {
        if !self.users.exists(id).await? {
            return Err(AppError::not_found(format!("User not found: {}", id)));
        }

        self.users.delete(id).await
    }
}
