//! # devconf - Device Configuration Server
//!
//! Binary entry point: tracing setup and CLI dispatch.
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! devconf serve --host 0.0.0.0 --port 8080
//!
//! # CLI operations
//! devconf show
//! devconf show --complex
//! devconf set '{"ntp_tz": 5}'
//! devconf reset
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing — DEVCONF_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("DEVCONF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "devconf=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments and execute
    let cli = devconf::cli::Cli::parse();

    if let Err(e) = devconf::cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
