//! # Stockroom Dashboard Library
//!
//! Session layer of the inventory dashboard: wires the collaborators,
//! keeps the working copy of the catalog and exposes the commands the
//! screens call.
//!
//! ## Module Organization
//! ```text
//! stockroom_dashboard/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Collaborators behind trait objects
//! │   ├── session.rs  ◄─── Catalog snapshot + view state
//! │   └── config.rs   ◄─── Dashboard configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── view.rs     ◄─── Search, filter, sort, selection
//! │   ├── product.rs  ◄─── Product CRUD and bulk edits
//! │   ├── category.rs ◄─── Category tree commands
//! │   ├── lookup.rs   ◄─── Barcode/name lookup, bulk add, text generation
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiError;
use state::{DashboardConfig, SessionState, StoreState};

/// Runs the dashboard against the demo stores and prints the default
/// product table as JSON.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Dashboard Startup                                 │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → STOCKROOM_CONFIG file → STOCKROOM_* variables          │
/// │                                                                         │
/// │  2. Wire Collaborators ───────────────────────────────────────────────► │
/// │     • seeded MemoryStore, MockLookup, FallbackTextGenerator             │
/// │                                                                         │
/// │  3. Create Session ───────────────────────────────────────────────────► │
/// │     • configured default sort, empty query, filters at "All"            │
/// │                                                                         │
/// │  4. Load Catalog & Render ────────────────────────────────────────────► │
/// │     • get_view() → stdout                                               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), ApiError> {
    let config = DashboardConfig::load_or_default();
    info!(
        store = %config.store_name,
        currency = %config.currency_code,
        "Starting Stockroom dashboard"
    );

    let stores = StoreState::demo();
    let session = SessionState::new(config.default_sort);

    let summary = commands::product::load_catalog(&stores, &session).await?;
    info!(products = summary.total, "Catalog loaded");

    let view = commands::view::get_view(&session, &config);
    let json = serde_json::to_string_pretty(&view)
        .map_err(|e| ApiError::internal(format!("Failed to render view: {}", e)))?;
    println!("{}", json);

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom_store=trace` - Trace the store adapters only
/// - Default: INFO, DEBUG for the stockroom crates
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,stockroom=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
