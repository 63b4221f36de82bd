//! # devconf CLI Module
//!
//! This module implements the CLI interface for devconf.
//!
//! ## Available Commands
//!
//! - `serve` - Start the HTTP server
//! - `show` - Print the current configuration document
//! - `set` - Apply a configuration document and persist it
//! - `reset` - Reset the configuration to defaults and persist

mod commands;

use clap::{Parser, Subcommand};
use devconf_core::{ConfigError, FileBackend};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// devconf - Device Configuration Server
///
/// Schema-driven configuration for a small network-attached device:
/// typed parameters, defaults, JSON documents, one persisted file.
#[derive(Parser, Debug)]
#[command(name = "devconf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short = 'c', long, global = true, default_value = FileBackend::DEFAULT_NAME)]
    pub config: PathBuf,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Serve {
        /// Host to bind to (overrides the settings file)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides the settings file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to a TOML settings file
        #[arg(short, long)]
        settings: Option<PathBuf>,
    },

    /// Print the current configuration document
    Show {
        /// Print the management-UI projection (types, descriptions, capacities)
        #[arg(long)]
        complex: bool,
    },

    /// Apply a configuration document and persist it
    Set {
        /// Document text; absent keys revert to their defaults
        #[arg(conflicts_with = "file")]
        doc: Option<String>,

        /// Read the document from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Reset the configuration to defaults and persist
    Reset,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), ConfigError> {
    match cli.command {
        Some(Commands::Serve {
            host,
            port,
            settings,
        }) => cmd_serve(&cli.config, host, port, settings.as_deref()).await,
        Some(Commands::Show { complex }) => cmd_show(&cli.config, complex),
        Some(Commands::Set { doc, file }) => cmd_set(&cli.config, doc.as_deref(), file.as_deref()),
        Some(Commands::Reset) => cmd_reset(&cli.config),
        None => {
            // No subcommand - show the plain document by default
            cmd_show(&cli.config, false)
        }
    }
}
