use std::sync::Arc;

use tokio::sync::RwLock;

use crate::services::explainer::Explainer;
use crate::store::Store;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    /// Explanation collaborator; template explanations are used when absent
    pub explainer: Option<Arc<dyn Explainer>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates state with an empty store and no explainer
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::new())),
            explainer: None,
        }
    }

    /// Creates state backed by the given explanation collaborator
    pub fn with_explainer(explainer: Arc<dyn Explainer>) -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::new())),
            explainer: Some(explainer),
        }
    }

    /// Seeds the in-memory store with the demo catalog
    pub async fn seed_demo_data(&self) {
        self.store.write().await.seed_demo_data();
    }
}
