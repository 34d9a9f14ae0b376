//! # Flood Alert Demo Server
//!
//! File: cli/src/commands/srv/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `floodalert srv` serves the single-page demo: weather inputs with a
//! predict button, the Suraksha Bot chat box and the safety checklist. The
//! page talks to a small JSON API on the same server.
//!
//! ## Architecture
//!
//! - `config.rs`: merging command-line flags with the loaded configuration
//! - `handlers.rs`: shared state and the request handlers
//! - `server_logic.rs`: router, port selection and graceful shutdown
//! - `utils.rs`: network address helpers for the startup banner
//!
//! ## Examples
//!
//! ```bash
//! # Serve on http://localhost:8501
//! floodalert srv
//!
//! # Reachable from the local network, another model, no CORS
//! floodalert srv --host 0.0.0.0 --model ./models/forest.json --no-cors
//! ```
//!
//! Server startup flow:
//! 1. Load the configuration and merge the command-line flags over it
//! 2. Load the model; a missing or broken artifact stops here
//! 3. Render the page once and build the shared state
//! 4. Find an available port and serve until Ctrl+C
//!
use crate::bot::Responder;
use crate::core::error::Result;
use crate::core::templating::{render_page, PageContext};
use crate::model::FloodModel;
use tracing::info;

pub use config::SrvArgs;

/// Merges server flags with the configuration files.
pub mod config;

/// Shared state and Axum request handlers.
pub mod handlers;

/// Router construction and the server loop.
pub mod server_logic;

/// Network helpers for the startup banner.
pub mod utils;

/// # Handle Server Command (`handle_srv`)
///
/// Loads everything the handlers need up front and then runs the server.
/// Nothing is bound when the model cannot be loaded.
pub async fn handle_srv(args: SrvArgs) -> Result<()> {
    info!("Handling srv command with args: {:?}", args);

    let app_config = crate::core::config::load_config()?;
    let settings = config::ServerSettings::merge(&args, &app_config);
    info!("Effective server settings: {:?}", settings);

    let model = FloodModel::load(&settings.model_path)?;

    let state = handlers::AppState {
        model,
        responder: Responder::new(),
        page: render_page(&PageContext::default())?,
    };

    server_logic::run_server(settings, state).await
}
