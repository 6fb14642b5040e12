use std::collections::HashMap;

use uuid::Uuid;

use crate::models::{Interaction, Product, UserProfile};

/// Flat bonus for a product whose category is among the preferred categories
pub const CATEGORY_BONUS: f64 = 10.0;
/// Bonus per product tag found in the preferred tags
pub const TAG_BONUS: f64 = 3.0;
/// Number of recommendations returned when the caller does not specify one
pub const DEFAULT_TOP_N: usize = 5;

/// A product paired with its relevance score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub product: Product,
    pub score: f64,
}

/// Relevance score for a product against a user profile
///
/// Products the user has already interacted with score exactly 0. Otherwise
/// the score is a flat category bonus plus an uncapped per-matching-tag
/// bonus. The category bonus does not vary with the category's rank inside
/// the preferred list.
pub fn score_product(product: &Product, profile: &UserProfile) -> f64 {
    if profile.has_seen(&product.id) {
        return 0.0;
    }

    let mut score = 0.0;

    if profile.prefers_category(&product.category) {
        score += CATEGORY_BONUS;
    }

    let matching_tags = product
        .tags
        .iter()
        .filter(|tag| profile.prefers_tag(tag))
        .count();
    score += matching_tags as f64 * TAG_BONUS;

    score
}

/// Ranks the catalog against a profile and returns at most `top_n` products
///
/// Already-seen products are removed from the candidate pool entirely, and
/// only strictly positive scores survive. The sort is stable, so products
/// with equal scores keep catalog iteration order. When nothing scores
/// positive — including the empty-profile case — the system-wide
/// popularity fallback is returned instead.
///
/// A `top_n` of 0 yields an empty list; callers are expected to reject
/// non-positive values at the API boundary.
pub fn rank(
    catalog: &[Product],
    profile: &UserProfile,
    top_n: usize,
    all_interactions: &[Interaction],
) -> Vec<Product> {
    let mut candidates: Vec<ScoredCandidate> = catalog
        .iter()
        .filter(|product| !profile.has_seen(&product.id))
        .filter_map(|product| {
            let score = score_product(product, profile);
            if score > 0.0 {
                Some(ScoredCandidate {
                    product: product.clone(),
                    score,
                })
            } else {
                None
            }
        })
        .collect();

    if candidates.is_empty() {
        tracing::debug!(
            catalog_size = catalog.len(),
            empty_profile = profile.is_empty(),
            "No positive-score candidates, using popularity fallback"
        );
        return popularity_fallback(catalog, top_n, all_interactions);
    }

    // Stable sort: equal scores keep catalog order, making results reproducible
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    candidates
        .into_iter()
        .take(top_n)
        .map(|candidate| candidate.product)
        .collect()
}

/// Popularity ranking over the entire interaction log
///
/// Used when a user has no actionable preference signal. Counts every
/// interaction across all users and action kinds, ties broken by catalog
/// order. The already-seen exclusion deliberately does not apply here: the
/// point is to surface generally popular items.
pub fn popularity_fallback(
    catalog: &[Product],
    top_n: usize,
    all_interactions: &[Interaction],
) -> Vec<Product> {
    let mut counts: HashMap<Uuid, usize> = HashMap::new();
    for interaction in all_interactions {
        *counts.entry(interaction.product_id).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&Product, usize)> = catalog
        .iter()
        .map(|product| (product, counts.get(&product.id).copied().unwrap_or(0)))
        .collect();

    // Stable sort: ties keep catalog order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(top_n)
        .map(|(product, _)| product.clone())
        .collect()
}
