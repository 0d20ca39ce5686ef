use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::api::AppState;

pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.prometheus_handle.as_ref().map_or_else(
        || "Metrics not enabled or failed to initialize".to_string(),
        metrics_exporter_prometheus::PrometheusHandle::render,
    )
}

/// What a request was routed to. Used as the `endpoint` label so metric
/// cardinality stays fixed whatever ids or stray paths clients send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ShowList,
    ShowDetail,
    Health,
    Metrics,
    Unmatched,
}

impl Endpoint {
    /// Classifies a matched route pattern (`None` when no route matched).
    pub fn from_route(route: Option<&str>) -> Self {
        match route {
            None => Self::Unmatched,
            Some("/metrics") => Self::Metrics,
            Some(route) if route.starts_with("/health/") => Self::Health,
            Some(route) if route.trim_end_matches('/').ends_with("{id}") => Self::ShowDetail,
            Some(_) => Self::ShowList,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShowList => "show_list",
            Self::ShowDetail => "show_detail",
            Self::Health => "health",
            Self::Metrics => "metrics",
            Self::Unmatched => "unmatched",
        }
    }
}

/// The raw `{id}` segment of a detail request path.
fn show_id_segment(path: &str) -> Option<&str> {
    path.trim_end_matches('/').rsplit('/').next()
}

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();

    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string());
    let endpoint = Endpoint::from_route(route.as_deref());

    let path = req.uri().path().to_string();
    let show_id = match endpoint {
        Endpoint::ShowDetail => show_id_segment(&path).map(str::to_string),
        _ => None,
    };

    let span = info_span!(
        "request",
        %request_id,
        method = %req.method(),
        %path,
        endpoint = endpoint.as_str(),
        show_id,
    );

    async move {
        let response = next.run(req).await;
        let elapsed = start.elapsed();
        let status = response.status();

        metrics::counter!(
            "showcase_requests_total",
            "endpoint" => endpoint.as_str(),
            "status" => status.as_u16().to_string()
        )
        .increment(1);
        metrics::histogram!(
            "showcase_request_duration_seconds",
            "endpoint" => endpoint.as_str()
        )
        .record(elapsed.as_secs_f64());

        if endpoint == Endpoint::ShowDetail && status.as_u16() == 404 {
            metrics::counter!("showcase_show_lookups_missed_total").increment(1);
        }

        info!(
            event = "http_request_finished",
            status_code = status.as_u16(),
            duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            "Request finished"
        );

        response
    }
    .instrument(span)
    .await
}
