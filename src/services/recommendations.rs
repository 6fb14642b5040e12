use crate::{
    models::{Interaction, Product, User},
    services::{
        explainer::{fallback_explanation, Explainer},
        profile::build_profile,
        ranking::rank,
        summary::summarize_behavior,
    },
};

/// A complete recommendation: ranked products plus the explanation pieces
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub products: Vec<Product>,
    pub explanation: String,
    pub behavior_summary: String,
}

/// Generates personalized product recommendations with an explanation
///
/// Builds the user's profile from their interaction history, ranks the
/// catalog against it (falling back to system-wide popularity when there is
/// no actionable signal), and asks the explainer collaborator for a
/// justification. Collaborator failure or absence degrades to the
/// deterministic template; the ranked list is produced either way.
pub async fn recommend(
    user: &User,
    catalog: &[Product],
    user_interactions: &[Interaction],
    all_interactions: &[Interaction],
    top_n: usize,
    explainer: Option<&dyn Explainer>,
) -> Recommendation {
    let profile = build_profile(user_interactions, catalog);
    let products = rank(catalog, &profile, top_n, all_interactions);
    let behavior_summary = summarize_behavior(&profile);

    tracing::info!(
        user_id = %user.id,
        interaction_count = profile.interaction_count,
        recommended = products.len(),
        "Recommendations computed"
    );

    let explanation = match explainer {
        Some(explainer) if !products.is_empty() => {
            match explainer.explain(user, &products, &behavior_summary).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        provider = explainer.name(),
                        "Explainer failed, using template fallback"
                    );
                    fallback_explanation(user, &products, &behavior_summary)
                }
            }
        }
        _ => fallback_explanation(user, &products, &behavior_summary),
    };

    Recommendation {
        products,
        explanation,
        behavior_summary,
    }
}
