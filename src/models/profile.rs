use std::collections::HashSet;

use uuid::Uuid;

use super::Product;

/// Preference summary derived from a user's interaction history
///
/// Profiles are ephemeral: they are recomputed from the interaction log on
/// every request and never stored. All fields are derived exclusively from
/// the interaction set the profile was built from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserProfile {
    /// Product ids the user has viewed, clicked, or purchased. Excluded
    /// from standard (non-fallback) recommendations.
    pub seen: HashSet<Uuid>,
    /// Top 3 categories by interaction frequency, first-seen tie-break
    pub preferred_categories: Vec<String>,
    /// Top 5 tags by interaction frequency, first-seen tie-break
    pub preferred_tags: Vec<String>,
    /// Products viewed, in interaction order
    pub viewed: Vec<Product>,
    /// Products purchased, in interaction order
    pub purchased: Vec<Product>,
    /// Total number of interactions the profile was built from
    pub interaction_count: usize,
}

impl UserProfile {
    /// True when the user has no interaction history at all
    pub fn is_empty(&self) -> bool {
        self.interaction_count == 0
    }

    /// Checks whether the user has already interacted with a product
    pub fn has_seen(&self, product_id: &Uuid) -> bool {
        self.seen.contains(product_id)
    }

    pub fn prefers_category(&self, category: &str) -> bool {
        self.preferred_categories.iter().any(|c| c == category)
    }

    pub fn prefers_tag(&self, tag: &str) -> bool {
        self.preferred_tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_empty() {
        let profile = UserProfile::default();
        assert!(profile.is_empty());
        assert!(profile.seen.is_empty());
        assert!(profile.preferred_categories.is_empty());
        assert!(profile.preferred_tags.is_empty());
    }

    #[test]
    fn test_prefers_category() {
        let profile = UserProfile {
            preferred_categories: vec!["Electronics".to_string()],
            ..Default::default()
        };
        assert!(profile.prefers_category("Electronics"));
        assert!(!profile.prefers_category("Home"));
    }

    #[test]
    fn test_has_seen() {
        let id = Uuid::new_v4();
        let mut profile = UserProfile::default();
        profile.seen.insert(id);
        assert!(profile.has_seen(&id));
        assert!(!profile.has_seen(&Uuid::new_v4()));
    }
}
