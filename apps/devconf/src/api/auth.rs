//! # Authentication Module
//!
//! Optional API key authentication for the configuration endpoints. A small
//! network device has exactly one credential; there are no users or roles.
//!
//! ## Configuration
//!
//! - `DEVCONF_API_KEY`: If set, all requests (except /health) require this key
//!
//! Send the key in the Authorization header, with or without the `Bearer `
//! prefix.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;

// =============================================================================
// API KEY AUTHENTICATION
// =============================================================================

/// Get API key from environment variable.
///
/// Returns `Some(key)` if `DEVCONF_API_KEY` is set and non-empty,
/// `None` otherwise (disabling authentication).
pub fn get_api_key_from_env() -> Option<String> {
    std::env::var("DEVCONF_API_KEY")
        .ok()
        .filter(|k| !k.is_empty())
}

/// Constant-time key comparison.
///
/// Both keys are padded to a common length so `ct_eq` always runs over the
/// same number of bytes, preventing length-leaking side channels; the length
/// check itself happens after the comparison.
fn keys_match(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();

    let max_len = provided.len().max(expected.len());
    let mut padded_provided = vec![0u8; max_len];
    let mut padded_expected = vec![0u8; max_len];
    padded_provided[..provided.len()].copy_from_slice(provided);
    padded_expected[..expected.len()].copy_from_slice(expected);

    let bytes_match: bool = padded_provided.ct_eq(&padded_expected).into();
    bytes_match && provided.len() == expected.len()
}

/// API key authentication middleware.
///
/// If `DEVCONF_API_KEY` is set:
/// - `/health` is always allowed (for load balancer health checks)
/// - All other endpoints require a matching Authorization header
///
/// If `DEVCONF_API_KEY` is not set, all requests are allowed.
pub async fn api_key_auth_middleware(
    request: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, &'static str)> {
    let Some(expected) = get_api_key_from_env() else {
        return Ok(next.run(request).await);
    };

    if request.uri().path() == "/health" {
        return Ok(next.run(request).await);
    }

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let Some(header_value) = auth_header else {
        tracing::warn!(
            event = "auth_failure",
            reason = "missing_authorization_header",
            "Missing Authorization header"
        );
        return Err((StatusCode::UNAUTHORIZED, "Unauthorized"));
    };

    // Support both "Bearer <key>" and raw "<key>" formats
    let provided = header_value.strip_prefix("Bearer ").unwrap_or(header_value);

    if keys_match(provided, &expected) {
        Ok(next.run(request).await)
    } else {
        tracing::warn!(
            event = "auth_failure",
            reason = "invalid_api_key",
            "Authentication failed: invalid API key"
        );
        Err((StatusCode::UNAUTHORIZED, "Unauthorized"))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_keys_accepted() {
        assert!(keys_match("secret-key", "secret-key"));
    }

    #[test]
    fn wrong_or_truncated_keys_rejected() {
        assert!(!keys_match("secret-kex", "secret-key"));
        assert!(!keys_match("secret", "secret-key"));
        assert!(!keys_match("secret-key-extra", "secret-key"));
        assert!(!keys_match("", "secret-key"));
    }

    #[test]
    fn empty_env_key_disables_auth() {
        // SAFETY: This is a unit test running in isolation.
        unsafe { std::env::remove_var("DEVCONF_API_KEY") };
        assert!(get_api_key_from_env().is_none());
    }
}
