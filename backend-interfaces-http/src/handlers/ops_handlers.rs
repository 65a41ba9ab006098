use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use tracing::error;

use backend_application::AppState;

#[derive(serde::Serialize)]
pub struct HealthStatus {
    status: String,
}

pub async fn health_live() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
    })
}

pub async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    match state.event_repo.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthStatus {
                status: "ready".to_string(),
            }),
        ),
        Err(err) => {
            error!("readiness probe failed: {err:#}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthStatus {
                    status: "database unreachable".to_string(),
                }),
            )
        }
    }
}

pub async fn metrics_prometheus(State(state): State<AppState>) -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; version=0.0.4"),
    );
    (headers, state.metrics.render_prometheus())
}
