//! User entity.

use crate::UserId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level keys that can never be stored in the extra-field map.
/// `id` is server-owned; `name` and `bio` live in their own fields.
const RESERVED_KEYS: [&str; 3] = ["id", "name", "bio"];

/// A record in the user directory.
///
/// Beyond the required `name` and `bio`, clients may submit arbitrary
/// additional fields; they are persisted verbatim in `extra` and flattened
/// back into the JSON object on the way out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, generated server-side at creation.
    pub id: UserId,

    /// Display name, required at creation.
    pub name: String,

    /// Short biography, required at creation.
    pub bio: String,

    /// Additional client-submitted fields, persisted verbatim.
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl User {
    /// Creates a new user with a freshly generated id.
    ///
    /// Reserved keys in `extra` are dropped so a client-supplied `id` can
    /// never shadow the generated one.
    #[must_use]
    pub fn new(name: String, bio: String, extra: Map<String, Value>) -> Self {
        Self {
            id: UserId::generate(),
            name,
            bio,
            extra: strip_reserved(extra),
        }
    }

    /// Applies an update payload: `name` and `bio` are overwritten, extra
    /// fields in the payload are added or overwritten, and extra fields not
    /// mentioned in the payload are retained. The id never changes.
    pub fn apply_changes(&mut self, name: String, bio: String, extra: Map<String, Value>) {
        self.name = name;
        self.bio = bio;
        for (key, value) in strip_reserved(extra) {
            self.extra.insert(key, value);
        }
    }
}

fn strip_reserved(mut extra: Map<String, Value>) -> Map<String, Value> {
    for key in RESERVED_KEYS {
        extra.remove(key);
    }
    extra
}
