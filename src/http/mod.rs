//! HTTP surface: health check and configuration diagnostics.

pub mod routes;

use axum::{http::{header, HeaderValue, Method}, routing::get, Router};
use tower_http::{cors::{AllowOrigin, Any, CorsLayer}, trace::TraceLayer};

use crate::config::{self, ConfigSource};
use routes::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(routes::healthz))
        .route("/api/debug/config", get(routes::debug_config))
        .layer(cors_layer(&state.source))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(source: &impl ConfigSource) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);
    let origins: Vec<HeaderValue> = config::cors_origins(source)
        .into_iter()
        .filter_map(|o| match HeaderValue::from_str(&o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
