//! HTTP handlers: health and configuration diagnostics.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::config::service_account::{self, ServiceAccountStatus};
use crate::config::validate::resolve;
use crate::config::{ConfigSource, KeyResolution, Requirements};

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ConfigSource + Send + Sync>,
    pub requirements: Arc<Requirements>,
}

#[derive(Debug, Serialize)]
pub struct KeyStatus {
    pub key: String,
    pub resolution: KeyResolution,
}

/// Presence report for deployment debugging. Names and flags only, never values.
#[derive(Debug, Serialize)]
pub struct ConfigDiagnostics {
    pub keys: Vec<KeyStatus>,
    pub service_account: ServiceAccountStatus,
    pub node_env: String,
}

pub async fn healthz() -> &'static str { "ok" }

pub async fn debug_config(State(state): State<AppState>) -> Json<ConfigDiagnostics> {
    let keys = state
        .requirements
        .keys()
        .into_iter()
        .map(|key| KeyStatus {
            resolution: resolve(&state.source, &key),
            key: key.canonical_name,
        })
        .collect();
    Json(ConfigDiagnostics {
        keys,
        service_account: service_account::inspect(&state.source),
        node_env: state
            .source
            .non_empty("NODE_ENV")
            .unwrap_or_else(|| "development".to_string()),
    })
}
