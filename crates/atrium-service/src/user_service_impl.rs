//! `UserServiceImpl` — business logic over a [`UserRepository`].

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use atrium_core::{DirectoryError, DirectoryResult, User, UserId};
use atrium_repository::UserRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// User service implementation, generic over the storage backend.
pub struct UserServiceImpl<R: UserRepository> {
    user_repository: Arc<R>,
}

impl<R: UserRepository> UserServiceImpl<R> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserService for UserServiceImpl<R> {
    async fn list_users(&self) -> DirectoryResult<Vec<UserResponse>> {
        debug!("Listing users");

        let users = self.user_repository.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn get_user(&self, id: &UserId) -> DirectoryResult<UserResponse> {
        debug!("Getting user: {}", id);

        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DirectoryError::not_found(id))?;

        Ok(UserResponse::from(user))
    }

    async fn create_user(&self, request: CreateUserRequest) -> DirectoryResult<UserResponse> {
        debug!("Creating user");

        let name = required_on_create(request.name)?;
        let bio = required_on_create(request.bio)?;

        let user = User::new(name, bio, request.extra);
        let saved = self.user_repository.save(&user).await?;

        info!("User created: {}", saved.id);
        Ok(UserResponse::from(saved))
    }

    async fn update_user(
        &self,
        id: &UserId,
        request: UpdateUserRequest,
    ) -> DirectoryResult<UserResponse> {
        debug!("Updating user: {}", id);

        // Lookup miss beats payload validation: an unknown id is a 404 even
        // when the body is also invalid.
        let mut user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DirectoryError::not_found(id))?;

        let name = required_on_update(request.name)?;
        let bio = required_on_update(request.bio)?;

        user.apply_changes(name, bio, request.extra);
        let updated = self.user_repository.update(&user).await?;

        info!("User updated: {}", id);
        Ok(UserResponse::from(updated))
    }

    async fn delete_user(&self, id: &UserId) -> DirectoryResult<UserResponse> {
        debug!("Deleting user: {}", id);

        let removed = self
            .user_repository
            .delete(id)
            .await?
            .ok_or_else(|| DirectoryError::not_found(id))?;

        info!("User deleted: {}", id);
        Ok(UserResponse::from(removed))
    }
}

/// Creation requires the field to be present and non-empty.
fn required_on_create(field: Option<String>) -> DirectoryResult<String> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(DirectoryError::MissingRequiredFields),
    }
}

/// Updates only require presence; an explicit empty string is stored as-is.
fn required_on_update(field: Option<String>) -> DirectoryResult<String> {
    field.ok_or(DirectoryError::MissingRequiredFields)
}

impl<R: UserRepository> std::fmt::Debug for UserServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}
