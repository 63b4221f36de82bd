//! # devconf-core
//!
//! Schema-driven configuration engine for small network-attached devices -
//! THE ENGINE.
//!
//! A device build authors an immutable, ordered table of typed parameter
//! descriptors ([`ParamSchema`]), backs each parameter with a fixed-size
//! memory slot reachable by index ([`FieldStorage`]), and drives the whole
//! set through [`ConfigStore`]: default application, JSON round-trip, and
//! whole-resource persistence against a [`ConfigBackend`].
//!
//! ## Architectural Constraints
//!
//! The ENGINE:
//! - Is synchronous and single-owner: no internal locking, the caller
//!   serializes all access to a store instance
//! - Performs no retries: a backend failure surfaces immediately and the
//!   recovery policy (typically `clear()` and continue) belongs to the caller
//! - Never partially applies a document: a parse failure leaves every field
//!   untouched, a decoded document leaves every field either decoded or
//!   defaulted
//! - Emits document fields in schema order, so consecutive saves of an
//!   unchanged store are byte-identical

// =============================================================================
// MODULES
// =============================================================================

pub mod backend;
pub mod error;
pub mod schema;
pub mod storage;
pub mod store;
pub mod text;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use backend::{ConfigBackend, FileBackend, MemoryBackend};
pub use error::ConfigError;
pub use schema::{ParamDefault, ParamDescriptor, ParamSchema, ParamType};
pub use storage::FieldStorage;
pub use store::ConfigStore;
