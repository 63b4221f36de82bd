//! # Server Settings
//!
//! Optional TOML settings file for the `serve` command. Everything has a
//! default, so a missing file or an empty one is a working configuration.
//! Command-line flags override anything read here.

use devconf_core::ConfigError;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// SETTINGS
// =============================================================================

/// Settings for the HTTP server process.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::BackendUnavailable(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&raw)
            .map_err(|e| ConfigError::MalformedDocument(format!("{}: {}", path.display(), e)))
    }

    /// The socket address string the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_bind_localhost() {
        let settings = Settings::default();
        assert_eq!(settings.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "port = 9090").expect("write");

        let settings = Settings::load(file.path()).expect("load");
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 9090);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "prot = 9090").expect("write");

        let err = Settings::load(file.path()).expect_err("typo must fail");
        assert!(matches!(err, ConfigError::MalformedDocument(_)));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = Settings::load(&dir.path().join("absent.toml")).expect_err("must fail");
        assert!(matches!(err, ConfigError::BackendUnavailable(_)));
    }
}
