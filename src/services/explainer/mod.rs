//! Explanation collaborator abstraction
//!
//! Explanation generation is an external concern with a narrow contract:
//! given the user, the recommended products, and a behavior summary, return
//! a short natural-language justification. Implementations may fail or be
//! unavailable; the recommendation service substitutes the deterministic
//! template below in that case, so a ranked list is always accompanied by
//! some explanation.

use crate::{
    error::AppResult,
    models::{Product, User},
    services::summary::NO_ACTIVITY,
};

pub mod openai;

/// Number of products named in template explanations
const TEMPLATE_PRODUCT_LIMIT: usize = 3;

/// Trait for explanation generators
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Explainer: Send + Sync {
    /// Generates a natural-language explanation for a recommendation list
    async fn explain(
        &self,
        user: &User,
        products: &[Product],
        behavior: &str,
    ) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Deterministic template explanation
///
/// Used when no explainer is configured or the collaborator call fails.
/// Names the top recommended products and the leading product's category.
pub fn fallback_explanation(user: &User, products: &[Product], behavior: &str) -> String {
    if products.is_empty() {
        return format!(
            "Hello {}! We don't have enough information about your preferences yet. \
             Check out our popular products!",
            user.name
        );
    }

    let product_names = products
        .iter()
        .take(TEMPLATE_PRODUCT_LIMIT)
        .map(|product| product.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut explanation = format!(
        "Hi {}! Based on your recent activity, we think you'd love these products: {}. ",
        user.name, product_names
    );

    if !behavior.is_empty() && behavior != NO_ACTIVITY {
        explanation.push_str(&format!(
            "These recommendations match your interest in {} products. ",
            products[0].category
        ));
    } else {
        explanation.push_str("These are some of our most popular items that we think you'll enjoy. ");
    }

    explanation.push_str("Happy shopping!");
    explanation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new("Alice Johnson".to_string())
    }

    fn product(name: &str, category: &str) -> Product {
        Product::new(
            name.to_string(),
            category.to_string(),
            49.99,
            String::new(),
            vec![],
        )
    }

    #[test]
    fn test_fallback_with_no_products() {
        let explanation = fallback_explanation(&user(), &[], NO_ACTIVITY);
        assert!(explanation.starts_with("Hello Alice Johnson!"));
        assert!(explanation.contains("popular products"));
    }

    #[test]
    fn test_fallback_with_behavior_names_category() {
        let products = vec![
            product("Wireless Earbuds", "Electronics"),
            product("Desk Lamp", "Home"),
        ];
        let explanation = fallback_explanation(
            &user(),
            &products,
            "Recently viewed: Bluetooth Speaker. Interested in categories: Electronics",
        );
        assert!(explanation.contains("Wireless Earbuds, Desk Lamp"));
        assert!(explanation.contains("interest in Electronics products"));
        assert!(explanation.ends_with("Happy shopping!"));
    }

    #[test]
    fn test_fallback_without_behavior_mentions_popularity() {
        let products = vec![product("Wireless Earbuds", "Electronics")];
        let explanation = fallback_explanation(&user(), &products, NO_ACTIVITY);
        assert!(explanation.contains("most popular items"));
        assert!(!explanation.contains("interest in"));
    }

    #[test]
    fn test_fallback_limits_named_products_to_three() {
        let products = vec![
            product("One", "Electronics"),
            product("Two", "Electronics"),
            product("Three", "Electronics"),
            product("Four", "Electronics"),
        ];
        let explanation = fallback_explanation(&user(), &products, NO_ACTIVITY);
        assert!(explanation.contains("One, Two, Three"));
        assert!(!explanation.contains("Four"));
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let products = vec![product("Wireless Earbuds", "Electronics")];
        let first = fallback_explanation(&user(), &products, NO_ACTIVITY);
        let second = fallback_explanation(&user(), &products, NO_ACTIVITY);
        assert_eq!(first, second);
    }
}
