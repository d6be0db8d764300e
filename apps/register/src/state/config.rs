//! # Configuration State
//!
//! Stores register configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TILL_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use directories::UserDirs;
use serde::{Deserialize, Serialize};

/// Register configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the shell banner)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Folder that `export` without a path writes into
    pub export_dir: PathBuf,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Till POS"
    /// - Currency: $ with 2 decimals
    /// - Export folder: the user's documents folder, else the current one
    fn default() -> Self {
        ConfigState {
            store_name: "Till POS".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            export_dir: default_export_dir(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TILL_STORE_NAME`: Override store name
    /// - `TILL_CURRENCY_SYMBOL`: Override currency symbol
    /// - `TILL_EXPORT_DIR`: Override the default export folder
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("TILL_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("TILL_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(dir) = lookup("TILL_EXPORT_DIR").filter(|d| !d.trim().is_empty()) {
            config.export_dir = PathBuf::from(dir);
        }

        config
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use till_register_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = (cents / divisor).abs();
        let frac = (cents % divisor).abs();
        let sign = if cents < 0 { "-" } else { "" };

        if self.currency_decimals == 0 {
            return format!("{}{}{}", sign, self.currency_symbol, whole);
        }

        format!(
            "{}{}{}.{:0width$}",
            sign,
            self.currency_symbol,
            whole,
            frac,
            width = self.currency_decimals as usize
        )
    }

    /// Where `export` writes when the operator gives no path:
    /// `sales_report_<YYYYMMDD_HHMMSS>.csv` inside `export_dir`.
    pub fn default_report_path(&self, at: DateTime<Local>) -> PathBuf {
        self.export_dir
            .join(format!("sales_report_{}.csv", at.format("%Y%m%d_%H%M%S")))
    }
}

fn default_export_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
