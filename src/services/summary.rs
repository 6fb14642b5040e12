use crate::models::{Product, UserProfile};

/// Summary text used when a profile carries no activity at all
pub const NO_ACTIVITY: &str = "No previous activity";

/// Number of viewed products named in the summary
const VIEWED_LIMIT: usize = 3;

/// Formats a profile into a compact behavior summary for the explainer
///
/// Sections whose underlying list is empty are omitted rather than printed
/// with an empty label. Product names appear in interaction order, matching
/// the profile builder. Deterministic and pure.
pub fn summarize_behavior(profile: &UserProfile) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !profile.purchased.is_empty() {
        parts.push(format!(
            "Recently purchased: {}",
            join_names(&profile.purchased, profile.purchased.len())
        ));
    }

    if !profile.viewed.is_empty() {
        parts.push(format!(
            "Recently viewed: {}",
            join_names(&profile.viewed, VIEWED_LIMIT)
        ));
    }

    if !profile.preferred_categories.is_empty() {
        parts.push(format!(
            "Interested in categories: {}",
            profile.preferred_categories.join(", ")
        ));
    }

    if parts.is_empty() {
        NO_ACTIVITY.to_string()
    } else {
        parts.join(". ")
    }
}

fn join_names(products: &[Product], limit: usize) -> String {
    products
        .iter()
        .take(limit)
        .map(|product| product.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str) -> Product {
        Product::new(
            name.to_string(),
            "Electronics".to_string(),
            9.99,
            String::new(),
            vec![],
        )
    }

    #[test]
    fn test_empty_profile_reports_no_activity() {
        let summary = summarize_behavior(&UserProfile::default());
        assert_eq!(summary, NO_ACTIVITY);
    }

    #[test]
    fn test_all_sections_present() {
        let profile = UserProfile {
            purchased: vec![product("Speaker")],
            viewed: vec![product("Headphones"), product("Earbuds")],
            preferred_categories: vec!["Electronics".to_string(), "Home".to_string()],
            ..Default::default()
        };

        let summary = summarize_behavior(&profile);
        assert_eq!(
            summary,
            "Recently purchased: Speaker. \
             Recently viewed: Headphones, Earbuds. \
             Interested in categories: Electronics, Home"
        );
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let profile = UserProfile {
            viewed: vec![product("Headphones")],
            preferred_categories: vec!["Electronics".to_string()],
            ..Default::default()
        };

        let summary = summarize_behavior(&profile);
        assert!(!summary.contains("Recently purchased"));
        assert!(summary.starts_with("Recently viewed: Headphones"));
    }

    #[test]
    fn test_viewed_limited_to_three() {
        let profile = UserProfile {
            viewed: vec![
                product("One"),
                product("Two"),
                product("Three"),
                product("Four"),
            ],
            ..Default::default()
        };

        let summary = summarize_behavior(&profile);
        assert!(summary.contains("One, Two, Three"));
        assert!(!summary.contains("Four"));
    }

    #[test]
    fn test_summary_is_deterministic() {
        let profile = UserProfile {
            purchased: vec![product("Speaker")],
            preferred_categories: vec!["Electronics".to_string()],
            ..Default::default()
        };

        assert_eq!(summarize_behavior(&profile), summarize_behavior(&profile));
    }
}
