//! # State Module
//!
//! Application state for the dashboard, split by concern so each command
//! takes only what it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  StoreState  │  │ SessionState │  │ DashboardConfig  │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<dyn     │  │  Arc<Mutex<  │  │  currency        │              │
//! │  │   ..Store>   │  │   Session    │  │  default sort    │              │
//! │  │  lookup, text│  │  >>          │  │  "All" label     │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • StoreState: collaborators are Send + Sync, internally locked        │
//! │  • SessionState: Arc<Mutex<T>>, never locked across .await             │
//! │  • DashboardConfig: Read-only after initialization                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;
mod store;

pub use config::{DashboardConfig, Section, SymbolPosition, CONFIG_PATH_ENV};
pub use session::{Session, SessionState};
pub use store::StoreState;
