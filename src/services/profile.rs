use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::models::{ActionKind, Interaction, Product, UserProfile};

/// Number of preferred categories kept in a profile
const TOP_CATEGORIES: usize = 3;
/// Number of preferred tags kept in a profile
const TOP_TAGS: usize = 5;

/// Frequency counter that remembers insertion order
///
/// Ranking by raw frequency alone is not deterministic when counts tie, so
/// each key also records the position at which it was first observed. Ties
/// resolve to the key that appeared earlier in the interaction sequence.
struct FrequencyRanker {
    counts: HashMap<String, Entry>,
    next_position: usize,
}

struct Entry {
    count: usize,
    first_seen: usize,
}

impl FrequencyRanker {
    fn new() -> Self {
        Self {
            counts: HashMap::new(),
            next_position: 0,
        }
    }

    fn add(&mut self, key: &str) {
        if let Some(entry) = self.counts.get_mut(key) {
            entry.count += 1;
        } else {
            self.counts.insert(
                key.to_string(),
                Entry {
                    count: 1,
                    first_seen: self.next_position,
                },
            );
        }
        self.next_position += 1;
    }

    /// Top keys by descending count; equal counts keep first-seen order
    fn top(&self, n: usize) -> Vec<String> {
        let mut entries: Vec<(&String, &Entry)> = self.counts.iter().collect();
        entries.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        entries
            .into_iter()
            .take(n)
            .map(|(key, _)| key.clone())
            .collect()
    }
}

/// Builds a preference profile from a user's interaction history
///
/// Every interaction contributes to category frequency, and tag frequency
/// is collected from every interacted product regardless of action kind.
/// The seen set is the union of product ids across all kinds. Interactions
/// referencing products missing from the catalog are skipped.
///
/// A user with no interactions yields an empty profile; that is a valid
/// state, not an error, and the ranker handles it via its fallback path.
pub fn build_profile(interactions: &[Interaction], catalog: &[Product]) -> UserProfile {
    if interactions.is_empty() {
        return UserProfile::default();
    }

    let products_by_id: HashMap<Uuid, &Product> =
        catalog.iter().map(|product| (product.id, product)).collect();

    let mut seen: HashSet<Uuid> = HashSet::new();
    let mut viewed: Vec<Product> = Vec::new();
    let mut purchased: Vec<Product> = Vec::new();
    let mut categories = FrequencyRanker::new();
    let mut tags = FrequencyRanker::new();

    for interaction in interactions {
        let Some(product) = products_by_id.get(&interaction.product_id) else {
            tracing::debug!(
                product_id = %interaction.product_id,
                "Interaction references unknown product, skipping"
            );
            continue;
        };

        seen.insert(product.id);

        match interaction.action {
            ActionKind::View => viewed.push((*product).clone()),
            ActionKind::Purchase => purchased.push((*product).clone()),
            ActionKind::Click => {}
        }

        categories.add(&product.category);
        for tag in &product.tags {
            tags.add(tag);
        }
    }

    UserProfile {
        seen,
        preferred_categories: categories.top(TOP_CATEGORIES),
        preferred_tags: tags.top(TOP_TAGS),
        viewed,
        purchased,
        interaction_count: interactions.len(),
    }
}
