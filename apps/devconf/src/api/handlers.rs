//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use super::{
    AppState,
    types::{ConfigOpResponse, ConfigQuery, HealthResponse},
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use devconf_core::ConfigError;
use serde_json::Value;

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// GET CONFIG HANDLER
// =============================================================================

/// Current configuration document.
///
/// `GET /config` returns the plain document; `GET /config?complex` returns
/// the management-UI projection with per-field type, value, description, and
/// capacity.
pub async fn get_config_handler(
    State(state): State<AppState>,
    Query(query): Query<ConfigQuery>,
) -> impl IntoResponse {
    let store = state.store.read().await;

    let doc = if query.wants_complex() {
        store.complex_document()
    } else {
        store.write_document()
    };

    (StatusCode::OK, Json(Value::Object(doc)))
}

// =============================================================================
// SET CONFIG HANDLER
// =============================================================================

/// Apply a configuration document and persist it.
///
/// The body is the raw document text. A document that does not parse is a
/// client error and changes nothing; a persistence failure after a
/// successful decode is a server error (the in-memory fields have already
/// been updated, matching the engine's decode-then-save contract).
pub async fn set_config_handler(State(state): State<AppState>, body: String) -> impl IntoResponse {
    let mut store = state.store.write().await;

    match store.set_from_json(&body) {
        Ok(()) => (StatusCode::OK, Json(ConfigOpResponse::ok())),
        Err(e @ ConfigError::MalformedDocument(_)) => {
            tracing::warn!("Rejected configuration document: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(ConfigOpResponse::error(e.to_string())),
            )
        }
        Err(e) => {
            tracing::error!("Failed to persist configuration: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ConfigOpResponse::error(e.to_string())),
            )
        }
    }
}

// =============================================================================
// CLEAR CONFIG HANDLER
// =============================================================================

/// Reset every field to its default and persist the result.
pub async fn clear_config_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut store = state.store.write().await;

    match store.reset() {
        Ok(()) => (StatusCode::OK, Json(ConfigOpResponse::ok())),
        Err(e) => {
            tracing::error!("Failed to persist configuration reset: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ConfigOpResponse::error(e.to_string())),
            )
        }
    }
}
