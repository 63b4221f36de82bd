//! # Persistence Backends
//!
//! Whole-resource byte storage behind the engine's `load`/`save`. One fixed
//! resource per device; reads return the full byte stream, writes replace it
//! entirely. No partial addressing, no transactions beyond what the backend
//! itself guarantees.

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

// =============================================================================
// BACKEND TRAIT
// =============================================================================

/// Named-resource byte storage used for persistence.
pub trait ConfigBackend {
    /// Read the whole resource.
    fn read(&mut self) -> Result<Vec<u8>, ConfigError>;

    /// Replace the whole resource.
    fn write(&mut self, bytes: &[u8]) -> Result<(), ConfigError>;
}

impl<B: ConfigBackend + ?Sized> ConfigBackend for Box<B> {
    fn read(&mut self) -> Result<Vec<u8>, ConfigError> {
        (**self).read()
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), ConfigError> {
        (**self).write(bytes)
    }
}

// =============================================================================
// FILE BACKEND
// =============================================================================

/// Filesystem-backed resource: one fixed path per device.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Conventional resource name for a device configuration.
    pub const DEFAULT_NAME: &'static str = "config.json";

    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigBackend for FileBackend {
    fn read(&mut self) -> Result<Vec<u8>, ConfigError> {
        std::fs::read(&self.path)
            .map_err(|e| ConfigError::BackendUnavailable(format!("{}: {}", self.path.display(), e)))
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), ConfigError> {
        std::fs::write(&self.path, bytes)
            .map_err(|e| ConfigError::BackendWriteFailure(format!("{}: {}", self.path.display(), e)))
    }
}

// =============================================================================
// MEMORY BACKEND
// =============================================================================

/// Volatile in-memory resource, for tests and diskless setups.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    data: Option<Vec<u8>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored bytes, if anything has been written yet.
    #[must_use]
    pub fn contents(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }
}

impl ConfigBackend for MemoryBackend {
    fn read(&mut self) -> Result<Vec<u8>, ConfigError> {
        self.data
            .clone()
            .ok_or_else(|| ConfigError::BackendUnavailable("no document stored".to_string()))
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), ConfigError> {
        self.data = Some(bytes.to_vec());
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_backend_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut backend = FileBackend::new(dir.path().join(FileBackend::DEFAULT_NAME));

        backend.write(b"{\"a\":1}").expect("write");
        assert_eq!(backend.read().expect("read"), b"{\"a\":1}");
    }

    #[test]
    fn file_backend_missing_resource_is_unavailable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut backend = FileBackend::new(dir.path().join("absent.json"));

        let err = backend.read().expect_err("missing file must fail");
        assert!(matches!(err, ConfigError::BackendUnavailable(_)));
    }

    #[test]
    fn file_backend_write_replaces_whole_resource() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut backend = FileBackend::new(dir.path().join(FileBackend::DEFAULT_NAME));

        backend.write(b"first document, quite long").expect("write");
        backend.write(b"short").expect("write");
        assert_eq!(backend.read().expect("read"), b"short");
    }

    #[test]
    fn memory_backend_empty_then_roundtrip() {
        let mut backend = MemoryBackend::new();
        assert!(matches!(
            backend.read(),
            Err(ConfigError::BackendUnavailable(_))
        ));

        backend.write(b"xyz").expect("write");
        assert_eq!(backend.read().expect("read"), b"xyz");
        assert_eq!(backend.contents(), Some(b"xyz".as_slice()));
    }
}
