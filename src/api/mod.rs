use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::error::AgentError;

pub mod handlers;

/// Where each request reads its configuration from.
pub type ConfigSource = Arc<dyn Fn() -> Result<Config, AgentError> + Send + Sync>;

/// Shared across requests. The client is pooled, config is resolved per request.
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub config_source: ConfigSource,
}

impl AppState {
    pub fn new(client: reqwest::Client, config_source: ConfigSource) -> Self {
        Self {
            client,
            config_source,
        }
    }

    /// Production state: shared client, config from the environment.
    pub fn from_env() -> Self {
        Self::new(reqwest::Client::new(), Arc::new(Config::from_env))
    }
}

pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/crawler",
            get(handlers::crawler_handler).post(handlers::crawler_handler),
        )
        .with_state(state)
        .layer(cors)
}
