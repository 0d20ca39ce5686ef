use axum::{Router, http::HeaderValue, middleware, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::ShowService;
use crate::state::SharedState;

mod error;
mod observability;
mod shows;
mod system;
pub mod types;

pub use error::ApiError;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn show_service(&self) -> &Arc<dyn ShowService> {
        &self.shared.show_service
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let (mount_path, cors_origins) = {
        let config = state.config();
        (
            config.server.mount_path.clone(),
            config.server.cors_allowed_origins.clone(),
        )
    };

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .merge(create_show_router(&mount_path))
        .route("/health/live", get(system::health_live))
        .route("/health/ready", get(system::health_ready))
        .route("/metrics", get(observability::get_metrics))
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}

/// Show routes under `mount_path`, answering with and without the trailing
/// slash.
fn create_show_router(mount_path: &str) -> Router<Arc<AppState>> {
    let base = mount_path.trim_end_matches('/');

    let mut router = Router::new()
        .route(&format!("{base}/"), get(shows::list_shows))
        .route(&format!("{base}/{{id}}"), get(shows::get_show))
        .route(&format!("{base}/{{id}}/"), get(shows::get_show));

    if !base.is_empty() {
        router = router.route(base, get(shows::list_shows));
    }

    router
}
