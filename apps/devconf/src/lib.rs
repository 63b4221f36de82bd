//! # devconf - Device Configuration Server
//!
//! Library surface of the devconf binary: the device schema and its record,
//! the HTTP API, the CLI, and the server settings layer. The binary in
//! `main.rs` only initializes tracing and dispatches to [`cli`].
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                apps/devconf (THE BINARY)              │
//! │                                                       │
//! │  ┌─────────────┐   ┌─────────────┐   ┌────────────┐  │
//! │  │   CLI       │   │  HTTP API   │   │  Settings  │  │
//! │  │  (clap)     │   │  (axum)     │   │  (toml)    │  │
//! │  └──────┬──────┘   └──────┬──────┘   └─────┬──────┘  │
//! │         │                 │                │         │
//! │         └────────┬────────┘────────────────┘         │
//! │                  ▼                                   │
//! │          ┌──────────────┐                            │
//! │          │ devconf-core │                            │
//! │          │ (THE ENGINE) │                            │
//! │          └──────────────┘                            │
//! └───────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod cli;
pub mod device;
pub mod settings;
