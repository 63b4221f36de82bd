//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.
//!
//! Configuration documents themselves are untyped [`serde_json`] objects -
//! their shape is the device schema's business, not the API's.

use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// CONFIG OPERATION RESPONSE
// =============================================================================

/// Outcome of a configuration write operation (set or reset).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigOpResponse {
    pub success: bool,
    pub error: Option<String>,
}

impl ConfigOpResponse {
    /// Successful operation.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// Failed operation with a reason.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

// =============================================================================
// CONFIG QUERY PARAMETERS
// =============================================================================

/// Query parameters for `GET /config`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigQuery {
    /// Present (with or without a value) to request the management-UI
    /// projection instead of the plain document.
    pub complex: Option<String>,
}

impl ConfigQuery {
    /// Whether the `complex` flag was given.
    #[must_use]
    pub fn wants_complex(&self) -> bool {
        self.complex.is_some()
    }
}
