use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog product available for recommendation
///
/// Products are read-only input to the recommendation engine. Tag order is
/// preserved as given and tags are matched case-sensitively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier for the product
    pub id: Uuid,
    /// Name of the product (e.g. "Wireless Mouse")
    pub name: String,
    /// Single category label (e.g. "Electronics")
    pub category: String,
    /// Price in dollars, non-negative
    pub price: f64,
    /// Free-text description
    pub description: String,
    /// Ordered list of short tags; may be empty
    pub tags: Vec<String>,
}

impl Product {
    /// Creates a new product with a random identifier
    pub fn new(
        name: String,
        category: String,
        price: f64,
        description: String,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            category,
            price,
            description,
            tags,
        }
    }

    /// Checks whether the product carries the given tag (case-sensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
