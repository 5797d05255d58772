//! # Stockroom Dashboard Entry Point
//!
//! Loads the demo catalog and prints the default product view.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, to stderr)
//! 2. Load configuration
//! 3. Wire the in-memory collaborators and the session
//! 4. Print the product table as JSON (stdout)

use std::process::ExitCode;

use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    stockroom_dashboard::init_tracing();

    match stockroom_dashboard::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{}", e.message);
            ExitCode::FAILURE
        }
    }
}
