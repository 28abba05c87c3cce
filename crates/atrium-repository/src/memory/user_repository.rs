//! In-memory user repository.

use crate::traits::UserRepository;
use async_trait::async_trait;
use atrium_core::{DirectoryError, DirectoryResult, User, UserId};
use parking_lot::RwLock;
use tracing::debug;

/// In-memory [`UserRepository`] backed by an insertion-ordered vector.
///
/// The collection lives for the lifetime of the process and is discarded on
/// exit. All operations are short critical sections behind a `RwLock`, so the
/// repository can be shared across request handlers via `Arc`.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with the startup seed record.
    #[must_use]
    pub fn seeded() -> Self {
        let repo = Self::new();
        let seed = User::new(
            "Jane Doe".to_string(),
            "Not Tarzan's Wife, another Jane".to_string(),
            serde_json::Map::new(),
        );
        repo.users.write().push(seed);
        repo
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> DirectoryResult<Vec<User>> {
        debug!("Repository: find_all");
        Ok(self.users.read().clone())
    }

    async fn find_by_id(&self, id: &UserId) -> DirectoryResult<Option<User>> {
        debug!("Repository: find_by_id {}", id);
        Ok(self.users.read().iter().find(|u| &u.id == id).cloned())
    }

    async fn save(&self, user: &User) -> DirectoryResult<User> {
        debug!("Repository: save user {}", user.id);
        self.users.write().push(user.clone());
        Ok(user.clone())
    }

    async fn update(&self, user: &User) -> DirectoryResult<User> {
        debug!("Repository: update user {}", user.id);
        let mut users = self.users.write();
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user.clone();
                Ok(user.clone())
            }
            None => Err(DirectoryError::not_found(&user.id)),
        }
    }

    async fn delete(&self, id: &UserId) -> DirectoryResult<Option<User>> {
        debug!("Repository: delete user {}", id);
        let mut users = self.users.write();
        let position = users.iter().position(|u| &u.id == id);
        Ok(position.map(|index| users.remove(index)))
    }
}

impl std::fmt::Debug for InMemoryUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryUserRepository").finish_non_exhaustive()
    }
}
