//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::api;
use crate::device::{self, DeviceStore};
use crate::settings::Settings;
use devconf_core::ConfigError;
use std::path::Path;

// =============================================================================
// STORE SETUP
// =============================================================================

/// Open the device store and populate it from the configuration file.
///
/// A missing or unreadable file is the first-boot case, not a fatal one:
/// the store falls back to schema defaults and the next `save` creates the
/// file. A document that exists but does not parse gets the same treatment,
/// with a warning, so a corrupted file never bricks the device.
pub fn open_device_store(config_path: &Path) -> DeviceStore {
    let mut store = device::open_store(config_path);
    if let Err(e) = store.load() {
        tracing::warn!(
            "Could not load {}: {}. Using schema defaults.",
            config_path.display(),
            e
        );
        store.clear();
    }
    store
}

// =============================================================================
// SERVE COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_serve(
    config_path: &Path,
    host: Option<String>,
    port: Option<u16>,
    settings_path: Option<&Path>,
) -> Result<(), ConfigError> {
    let mut settings = match settings_path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(host) = host {
        settings.host = host;
    }
    if let Some(port) = port {
        settings.port = port;
    }

    let store = open_device_store(config_path);

    println!("devconf Device Configuration Server");
    println!();
    println!("Configuration:");
    println!("  Host:   {}", settings.host);
    println!("  Port:   {}", settings.port);
    println!("  Config: {}", config_path.display());
    println!();
    println!("Endpoints:");
    println!("  GET    /config - Current configuration (?complex for UI projection)");
    println!("  POST   /config - Apply and persist a document");
    println!("  DELETE /config - Reset to defaults");
    println!("  GET    /health - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    api::run_server(&settings.bind_addr(), store).await
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// Print the current configuration document.
pub fn cmd_show(config_path: &Path, complex: bool) -> Result<(), ConfigError> {
    let store = open_device_store(config_path);

    if complex {
        println!("{}", store.to_complex_json());
    } else {
        println!("{}", store.to_json());
    }
    Ok(())
}

// =============================================================================
// SET COMMAND
// =============================================================================

/// Apply a configuration document and persist it.
pub fn cmd_set(
    config_path: &Path,
    doc: Option<&str>,
    file: Option<&Path>,
) -> Result<(), ConfigError> {
    let document = match (doc, file) {
        (Some(doc), _) => doc.to_string(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .map_err(|e| ConfigError::BackendUnavailable(format!("{}: {}", path.display(), e)))?,
        (None, None) => {
            return Err(ConfigError::MalformedDocument(
                "no document given: pass it inline or with --file".to_string(),
            ));
        }
    };

    let mut store = open_device_store(config_path);
    store.set_from_json(&document)?;

    println!("Configuration saved to {}", config_path.display());
    println!("{}", store.to_json());
    Ok(())
}

// =============================================================================
// RESET COMMAND
// =============================================================================

/// Reset the configuration to defaults and persist.
pub fn cmd_reset(config_path: &Path) -> Result<(), ConfigError> {
    let mut store = device::open_store(config_path);
    store.reset()?;

    println!("Configuration reset to defaults in {}", config_path.display());
    println!("{}", store.to_json());
    Ok(())
}
