//! Repository trait definitions.

use async_trait::async_trait;
use atrium_core::{DirectoryResult, User, UserId};

/// User repository trait.
///
/// Every operation returns a `DirectoryResult` even though the in-memory
/// backend cannot fail; the error channel is part of the contract so a
/// future persistent backend can surface storage failures.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns all users in insertion order.
    async fn find_all(&self) -> DirectoryResult<Vec<User>>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: &UserId) -> DirectoryResult<Option<User>>;

    /// Saves a new user, appending it to the collection.
    async fn save(&self, user: &User) -> DirectoryResult<User>;

    /// Replaces an existing user record in place.
    async fn update(&self, user: &User) -> DirectoryResult<User>;

    /// Deletes a user by ID, returning the removed record if it existed.
    async fn delete(&self, id: &UserId) -> DirectoryResult<Option<User>>;
}
