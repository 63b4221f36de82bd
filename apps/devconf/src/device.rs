//! # Device Schema
//!
//! The concrete parameter table and configuration record for this device
//! build, plus the store alias the CLI and HTTP API share.
//!
//! Adding a parameter means three edits that must stay in sync: a descriptor
//! in [`DEVICE_PARAMS`], a slot in [`DeviceConfig`], and a match arm in its
//! [`FieldStorage`] impl.

use devconf_core::{
    ConfigBackend, ConfigStore, FieldStorage, FileBackend, MemoryBackend, ParamDescriptor,
    ParamSchema, text,
};
use std::path::Path;

// =============================================================================
// PARAMETER TABLE
// =============================================================================

/// Authored parameter descriptors, in persisted document order.
pub const DEVICE_PARAMS: &[ParamDescriptor] = &[
    ParamDescriptor::text("wifi_ssid", Some("WiFi SSID"), 32, None),
    ParamDescriptor::secret("wifi_pswd", Some("WiFi password"), 32, None),
    ParamDescriptor::text("ntp_server", Some("NTP server"), 32, Some("pool.ntp.org")),
    ParamDescriptor::int8("ntp_tz", Some("NTP time zone"), 3),
    ParamDescriptor::boolean("ntp_update", Some("Enable NTP sync"), false),
];

/// The device schema.
pub const DEVICE_SCHEMA: ParamSchema = ParamSchema::new(DEVICE_PARAMS);

// =============================================================================
// CONFIGURATION RECORD
// =============================================================================

/// Backing storage for every device parameter, one fixed slot per
/// descriptor, in schema order.
#[derive(Debug, Default)]
pub struct DeviceConfig {
    wifi_ssid: [u8; 32],
    wifi_pswd: [u8; 32],
    ntp_server: [u8; 32],
    ntp_tz: [u8; 1],
    ntp_update: [u8; 1],
}

impl DeviceConfig {
    #[must_use]
    pub fn wifi_ssid(&self) -> &str {
        text::read_str(&self.wifi_ssid)
    }

    #[must_use]
    pub fn wifi_pswd(&self) -> &str {
        text::read_str(&self.wifi_pswd)
    }

    #[must_use]
    pub fn ntp_server(&self) -> &str {
        text::read_str(&self.ntp_server)
    }

    #[must_use]
    pub fn ntp_tz(&self) -> i8 {
        i8::from_ne_bytes(self.ntp_tz)
    }

    #[must_use]
    pub fn ntp_update(&self) -> bool {
        self.ntp_update[0] != 0
    }

    pub fn set_wifi(&mut self, ssid: &str, pswd: &str) {
        text::copy_str(&mut self.wifi_ssid, ssid);
        text::copy_str(&mut self.wifi_pswd, pswd);
    }

    pub fn set_ntp(&mut self, server: &str, tz: i8, update: bool) {
        text::copy_str(&mut self.ntp_server, server);
        self.ntp_tz = tz.to_ne_bytes();
        self.ntp_update = [u8::from(update)];
    }
}

impl FieldStorage for DeviceConfig {
    fn field(&self, index: usize) -> &[u8] {
        match index {
            0 => &self.wifi_ssid,
            1 => &self.wifi_pswd,
            2 => &self.ntp_server,
            3 => &self.ntp_tz,
            4 => &self.ntp_update,
            _ => unreachable!("no field at index {index}"),
        }
    }

    fn field_mut(&mut self, index: usize) -> &mut [u8] {
        match index {
            0 => &mut self.wifi_ssid,
            1 => &mut self.wifi_pswd,
            2 => &mut self.ntp_server,
            3 => &mut self.ntp_tz,
            4 => &mut self.ntp_update,
            _ => unreachable!("no field at index {index}"),
        }
    }
}

// =============================================================================
// DEVICE STORE
// =============================================================================

/// The store the CLI and HTTP API operate on. The backend is boxed so file
/// and in-memory deployments share one type.
pub type DeviceStore = ConfigStore<DeviceConfig, Box<dyn ConfigBackend + Send + Sync>>;

/// Store over the configuration file at `path`. Fields start zeroed; the
/// caller decides between `load()` and `clear()`.
#[must_use]
pub fn open_store(path: impl AsRef<Path>) -> DeviceStore {
    ConfigStore::new(
        DEVICE_SCHEMA,
        DeviceConfig::default(),
        Box::new(FileBackend::new(path.as_ref().to_path_buf())),
    )
}

/// Store over a volatile in-memory backend, cleared to defaults.
#[must_use]
pub fn memory_store() -> DeviceStore {
    let mut store = ConfigStore::new(
        DEVICE_SCHEMA,
        DeviceConfig::default(),
        Box::new(MemoryBackend::new()) as Box<dyn ConfigBackend + Send + Sync>,
    );
    store.clear();
    store
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_and_record_agree_on_slot_sizes() {
        let config = DeviceConfig::default();
        for index in 0..DEVICE_SCHEMA.count() {
            assert_eq!(
                Some(config.field(index).len()),
                DEVICE_SCHEMA.size(index),
                "slot size mismatch at index {index}"
            );
        }
    }

    #[test]
    fn defaults_match_device_expectations() {
        let mut store = memory_store();
        store.clear();

        let c = store.fields();
        assert_eq!(c.wifi_ssid(), "");
        assert_eq!(c.wifi_pswd(), "");
        assert_eq!(c.ntp_server(), "pool.ntp.org");
        assert_eq!(c.ntp_tz(), 3);
        assert!(!c.ntp_update());
    }

    #[test]
    fn typed_setters_show_up_in_documents() {
        let mut store = memory_store();
        store.fields_mut().set_wifi("lab", "hunter2");
        store.fields_mut().set_ntp("time.nist.gov", -5, true);

        let doc = store.write_document();
        assert_eq!(doc.get("wifi_ssid").expect("key"), "lab");
        assert_eq!(doc.get("wifi_pswd").expect("key"), "hunter2");
        assert_eq!(doc.get("ntp_server").expect("key"), "time.nist.gov");
        assert_eq!(doc.get("ntp_tz").expect("key"), -5);
        assert_eq!(doc.get("ntp_update").expect("key"), true);
    }
}
