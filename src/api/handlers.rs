use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{ActionKind, Interaction, Product, User},
    services::{ranking::DEFAULT_TOP_N, recommendations},
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserDetailResponse {
    pub id: Uuid,
    pub name: String,
    pub interaction_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub tags: Vec<String>,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price,
            description: product.description.clone(),
            tags: product.tags.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecordInteractionRequest {
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub action: ActionKind,
}

#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub top_n: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub user_id: Uuid,
    pub user_name: String,
    pub recommended_products: Vec<ProductResponse>,
    pub llm_explanation: String,
    pub user_behavior_summary: String,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get product recommendations for a user with an explanation
pub async fn recommend(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(params): Query<RecommendQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    let top_n = match params.top_n {
        Some(n) if n < 1 => {
            return Err(AppError::InvalidInput(
                "top_n must be a positive integer".to_string(),
            ))
        }
        Some(n) => n as usize,
        None => DEFAULT_TOP_N,
    };

    // Snapshot everything under the read lock, then drop it before awaiting
    // the explanation collaborator
    let (user, catalog, user_interactions, all_interactions) = {
        let store = state.store.read().await;
        let user = store
            .user(&user_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("User with ID {} not found", user_id)))?;
        (
            user,
            store.products().to_vec(),
            store.interactions_for(&user_id),
            store.all_interactions().to_vec(),
        )
    };

    tracing::info!(
        user_id = %user_id,
        top_n = top_n,
        "Processing recommendation request"
    );

    let recommendation = recommendations::recommend(
        &user,
        &catalog,
        &user_interactions,
        &all_interactions,
        top_n,
        state.explainer.as_deref(),
    )
    .await;

    Ok(Json(RecommendationResponse {
        user_id: user.id,
        user_name: user.name,
        recommended_products: recommendation
            .products
            .iter()
            .map(ProductResponse::from)
            .collect(),
        llm_explanation: recommendation.explanation,
        user_behavior_summary: recommendation.behavior_summary,
    }))
}

/// Get all users
pub async fn get_users(State(state): State<AppState>) -> Json<Vec<UserResponse>> {
    let store = state.store.read().await;
    let users: Vec<UserResponse> = store.users().iter().map(UserResponse::from).collect();
    Json(users)
}

/// Get details of a specific user
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<UserDetailResponse>> {
    let store = state.store.read().await;
    let user = store
        .user(&user_id)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(UserDetailResponse {
        id: user.id,
        name: user.name.clone(),
        interaction_count: store.interaction_count_for(&user_id),
    }))
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    if request.name.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "User name cannot be empty".to_string(),
        ));
    }

    let user = User::new(request.name);
    let response = UserResponse::from(&user);

    let mut store = state.store.write().await;
    store.add_user(user);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Get all products, optionally filtered by category
pub async fn get_products(
    State(state): State<AppState>,
    Query(params): Query<ProductsQuery>,
) -> Json<Vec<ProductResponse>> {
    let store = state.store.read().await;
    let products: Vec<ProductResponse> = store
        .products()
        .iter()
        .filter(|product| match &params.category {
            Some(category) => &product.category == category,
            None => true,
        })
        .map(ProductResponse::from)
        .collect();
    Json(products)
}

/// Get details of a specific product
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> AppResult<Json<ProductResponse>> {
    let store = state.store.read().await;
    let product = store
        .product(&product_id)
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;
    Ok(Json(ProductResponse::from(product)))
}

/// Create a new product
pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<ProductResponse>)> {
    if request.name.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Product name cannot be empty".to_string(),
        ));
    }
    if request.price < 0.0 {
        return Err(AppError::InvalidInput(
            "Product price cannot be negative".to_string(),
        ));
    }

    let product = Product::new(
        request.name,
        request.category,
        request.price,
        request.description,
        request.tags,
    );
    let response = ProductResponse::from(&product);

    let mut store = state.store.write().await;
    store.add_product(product);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Record a user/product interaction
pub async fn record_interaction(
    State(state): State<AppState>,
    Json(request): Json<RecordInteractionRequest>,
) -> AppResult<StatusCode> {
    let mut store = state.store.write().await;

    if store.user(&request.user_id).is_none() {
        return Err(AppError::NotFound(format!(
            "User with ID {} not found",
            request.user_id
        )));
    }
    if store.product(&request.product_id).is_none() {
        return Err(AppError::NotFound(format!(
            "Product with ID {} not found",
            request.product_id
        )));
    }

    store.record_interaction(Interaction::new(
        request.user_id,
        request.product_id,
        request.action,
    ));

    Ok(StatusCode::CREATED)
}

/// Get all distinct product categories
pub async fn get_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    let store = state.store.read().await;
    Json(CategoriesResponse {
        categories: store.categories(),
    })
}
