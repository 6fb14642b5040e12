use std::sync::Arc;

use curator_api::{
    api::{create_router, AppState},
    config::Config,
    services::explainer::openai::OpenAiExplainer,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "curator_api=debug,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let state = if config.has_openai_key() {
        let explainer = OpenAiExplainer::new(
            config.openai_api_key.clone().unwrap_or_default(),
            config.openai_api_url.clone(),
            config.openai_model.clone(),
        );
        tracing::info!(model = %config.openai_model, "OpenAI explainer configured");
        AppState::with_explainer(Arc::new(explainer))
    } else {
        tracing::info!("No OpenAI API key configured, using template explanations");
        AppState::new()
    };

    if config.seed_demo_data {
        state.seed_demo_data().await;
    }

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "curator-api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
