//! User service trait definition.

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use async_trait::async_trait;
use atrium_core::{DirectoryResult, UserId};

/// User directory service trait.
///
/// One method per API operation; every error a method can return maps to
/// exactly one HTTP status + body pair at the REST boundary.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Returns the full collection in insertion order.
    async fn list_users(&self) -> DirectoryResult<Vec<UserResponse>>;

    /// Gets a user by ID.
    async fn get_user(&self, id: &UserId) -> DirectoryResult<UserResponse>;

    /// Creates a new user from the given payload.
    async fn create_user(&self, request: CreateUserRequest) -> DirectoryResult<UserResponse>;

    /// Updates an existing user, merging the payload into the stored record.
    async fn update_user(
        &self,
        id: &UserId,
        request: UpdateUserRequest,
    ) -> DirectoryResult<UserResponse>;

    /// Deletes a user, returning the removed record.
    async fn delete_user(&self, id: &UserId) -> DirectoryResult<UserResponse>;
}
