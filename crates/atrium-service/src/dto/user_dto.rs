//! User-related DTOs.

use atrium_core::{User, UserId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request to create a new user.
///
/// `name` and `bio` are `Option` so the service can distinguish an absent
/// field (rejected with the contract's 400 message) from a present one.
/// Any other field lands in `extra` and is persisted verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub bio: Option<String>,
    #[serde(flatten, default)]
    pub extra: Map<String, Value>,
}

/// Request to update an existing user. Same shape as creation; the target
/// id comes from the URL path, never from the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub bio: Option<String>,
    #[serde(flatten, default)]
    pub extra: Map<String, Value>,
}

/// User response DTO. Serializes to the bare record the API contract
/// mandates: `id`, `name`, `bio`, plus any extra fields flattened in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub bio: String,
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            bio: user.bio,
            extra: user.extra,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            bio: user.bio.clone(),
            extra: user.extra.clone(),
        }
    }
}
