use std::sync::Arc;

use aims_predict::proxy::PredictionProxy;
use aims_storage::memory::MemoryStore;
use aims_storage::s3::S3Store;
use aims_storage::store::SurveyStore;

use crate::config::{ServerConfig, StoreBackend};

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SurveyStore>,
    pub predictor: PredictionProxy,
}

impl AppState {
    pub fn new(store: Arc<dyn SurveyStore>, predictor: PredictionProxy) -> Self {
        Self { store, predictor }
    }

    pub async fn from_config(config: &ServerConfig) -> Self {
        let store: Arc<dyn SurveyStore> = match config.store {
            StoreBackend::S3 => {
                let s3 = aims_storage::client::build_client().await;
                Arc::new(S3Store::new(s3, config.bucket.clone()))
            }
            StoreBackend::Memory => {
                tracing::warn!("using in-memory store; records are lost on exit");
                Arc::new(MemoryStore::new())
            }
        };

        Self::new(store, PredictionProxy::new(config.ml_base_url.clone()))
    }
}
