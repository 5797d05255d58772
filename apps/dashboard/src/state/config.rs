//! # Dashboard Configuration
//!
//! Stores dashboard configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKROOM_*`)
//! 2. Config file (path in `STOCKROOM_CONFIG`)
//! 3. Defaults (this file)
//!
//! ## Example File
//! ```toml
//! storeName = "Будмаркет"
//! currencySymbol = "₴"
//! allLabel = "Всі"
//!
//! [defaultSort]
//! field = "price"
//! direction = "asc"
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use stockroom_core::view::{CategoryFilter, SortDirection, SortField, SortState, StatusFilter};
use stockroom_core::Money;

use crate::error::ConfigError;

/// Environment variable holding the config file path.
pub const CONFIG_PATH_ENV: &str = "STOCKROOM_CONFIG";

const MAX_CURRENCY_DECIMALS: u8 = 4;

/// Where the currency symbol goes relative to the amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    /// `$12.34`
    Before,
    /// `12.34 ₴`
    #[default]
    After,
}

/// Dashboard section opened at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    #[default]
    Products,
    Categories,
    BulkAdd,
}

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    /// Store name shown in the header
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    pub symbol_position: SymbolPosition,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Sort applied when a session starts
    pub default_sort: SortState,

    /// Toolbar spelling of the "no filtering" entry
    pub all_label: String,

    pub initial_section: Section,
}

impl Default for DashboardConfig {
    /// ## Default Values
    /// - Store: "Stockroom"
    /// - Currency: UAH (₴ after the amount, 2 decimals)
    /// - Sort: newest first
    fn default() -> Self {
        DashboardConfig {
            store_name: "Stockroom".to_string(),
            currency_code: "UAH".to_string(),
            currency_symbol: "₴".to_string(),
            symbol_position: SymbolPosition::After,
            currency_decimals: 2,
            default_sort: SortState::default(),
            all_label: stockroom_core::ALL_LABEL.to_string(),
            initial_section: Section::Products,
        }
    }
}

impl DashboardConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file, if `path` is given and exists
    /// 3. Environment variables
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = DashboardConfig::default();

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading dashboard config from file");
                let contents = std::fs::read_to_string(path)?;
                config = DashboardConfig::from_toml_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Loads config from `STOCKROOM_CONFIG` or returns defaults if loading fails.
    pub fn load_or_default() -> Self {
        let path = std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
        Self::load(path.as_deref()).unwrap_or_else(|e| {
            warn!("Failed to load dashboard config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_decimals > MAX_CURRENCY_DECIMALS {
            return Err(ConfigError::Invalid(format!(
                "currency_decimals must be at most {}, got {}",
                MAX_CURRENCY_DECIMALS, self.currency_decimals
            )));
        }
        if self.all_label.trim().is_empty() {
            return Err(ConfigError::Invalid("all_label must not be empty".into()));
        }
        Ok(())
    }

    /// Applies `STOCKROOM_*` overrides read through `var`.
    ///
    /// ## Variables
    /// - `STOCKROOM_STORE_NAME`
    /// - `STOCKROOM_CURRENCY_CODE`, `STOCKROOM_CURRENCY_SYMBOL`,
    ///   `STOCKROOM_CURRENCY_DECIMALS`
    /// - `STOCKROOM_SORT`: `field` or `field:direction`, e.g. `price:asc`
    /// - `STOCKROOM_ALL_LABEL`
    ///
    /// Unparseable values are ignored with a warning.
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(name) = var("STOCKROOM_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(code) = var("STOCKROOM_CURRENCY_CODE") {
            self.currency_code = code;
        }

        if let Some(symbol) = var("STOCKROOM_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(decimals) = var("STOCKROOM_CURRENCY_DECIMALS") {
            match decimals.trim().parse::<u8>() {
                Ok(d) => self.currency_decimals = d,
                Err(_) => warn!(value = %decimals, "Ignoring invalid STOCKROOM_CURRENCY_DECIMALS"),
            }
        }

        if let Some(sort) = var("STOCKROOM_SORT") {
            match parse_sort(&sort) {
                Some(parsed) => self.default_sort = parsed,
                None => warn!(value = %sort, "Ignoring invalid STOCKROOM_SORT"),
            }
        }

        if let Some(label) = var("STOCKROOM_ALL_LABEL") {
            self.all_label = label;
        }
    }

    /// Formats a minor-unit amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_dashboard::state::DashboardConfig;
    ///
    /// let config = DashboardConfig::default();
    /// assert_eq!(config.format_currency(289_900), "2899.00 ₴");
    /// ```
    pub fn format_currency(&self, minor: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = minor / divisor;
        let frac = (minor % divisor).abs();

        let amount = if self.currency_decimals > 0 {
            format!(
                "{}.{:0width$}",
                whole.abs(),
                frac,
                width = self.currency_decimals as usize
            )
        } else {
            whole.abs().to_string()
        };
        let sign = if minor < 0 { "-" } else { "" };

        match self.symbol_position {
            SymbolPosition::Before => format!("{}{}{}", sign, self.currency_symbol, amount),
            SymbolPosition::After => format!("{}{} {}", sign, amount, self.currency_symbol),
        }
    }

    pub fn format_money(&self, amount: Money) -> String {
        self.format_currency(amount.minor())
    }

    /// Toolbar text for a category filter entry.
    pub fn category_filter_label(&self, filter: &CategoryFilter) -> String {
        match filter {
            CategoryFilter::All => self.all_label.clone(),
            CategoryFilter::Named(name) => name.clone(),
        }
    }

    /// Toolbar text for a status filter entry.
    pub fn status_filter_label(&self, filter: &StatusFilter) -> String {
        match filter {
            StatusFilter::All => self.all_label.clone(),
            StatusFilter::Only(status) => status.label().to_string(),
        }
    }
}

fn parse_sort(value: &str) -> Option<SortState> {
    let (field, direction) = match value.split_once(':') {
        Some((field, direction)) => (field, direction.parse::<SortDirection>().ok()?),
        None => (value, SortDirection::default()),
    };
    let field = field.parse::<SortField>().ok()?;
    Some(SortState::new(field, direction))
}
