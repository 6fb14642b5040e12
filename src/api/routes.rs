use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Recommendations
        .route("/recommend/:user_id", get(handlers::recommend))
        // Users
        .route("/users", get(handlers::get_users))
        .route("/users", post(handlers::create_user))
        .route("/users/:user_id", get(handlers::get_user))
        // Products
        .route("/products", get(handlers::get_products))
        .route("/products", post(handlers::create_product))
        .route("/products/:product_id", get(handlers::get_product))
        // Interactions
        .route("/interactions", post(handlers::record_interaction))
        // Categories
        .route("/categories", get(handlers::get_categories))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
