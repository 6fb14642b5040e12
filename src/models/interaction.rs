use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of interaction a user had with a product
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    View,
    Click,
    Purchase,
}

/// A single user/product interaction
///
/// Interactions are read-only input to the recommendation engine; the only
/// ordering the engine relies on is arrival order. The timestamp is carried
/// for API responses and is ignored by scoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub action: ActionKind,
    pub created_at: DateTime<Utc>,
}

impl Interaction {
    /// Creates a new interaction timestamped with the current time
    pub fn new(user_id: Uuid, product_id: Uuid, action: ActionKind) -> Self {
        Self {
            user_id,
            product_id,
            action,
            created_at: Utc::now(),
        }
    }
}
