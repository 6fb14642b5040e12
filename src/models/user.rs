use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user of the storefront
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,
    /// Display name (e.g. "Alice Johnson")
    pub name: String,
}

impl User {
    /// Creates a new user with a random identifier
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }
}
