//! # Config Commands
//!
//! Read-only access to the dashboard configuration.

use tracing::debug;

use crate::state::DashboardConfig;

/// Gets the current dashboard configuration.
///
/// ## When Used
/// - Startup (store name, initial section)
/// - Price columns (currency formatting)
pub fn get_config(config: &DashboardConfig) -> DashboardConfig {
    debug!("get_config command");
    config.clone()
}
