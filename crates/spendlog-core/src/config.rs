//! Ledger configuration
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. Explicit path, or the override in the data dir
//!    (~/.local/share/spendlog/config/ledger.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! Missing keys keep their built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::categories::{DEFAULT_CATEGORIES, FALLBACK_CATEGORY};
use crate::error::{Error, Result};
use crate::money::{CurrencyFormat, Grouping};
use crate::reports::DEFAULT_TOP_N;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/ledger.toml");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Seed taxonomy for a fresh ledger
    pub default_categories: Vec<String>,
    /// Target of cascade reassignment
    pub fallback_category: String,
    /// Reject expenses whose category is not registered
    pub strict_categories: bool,
    /// Length of the top-expenses ranking
    pub top_n: usize,
    pub currency: CurrencyFormat,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            default_categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            fallback_category: FALLBACK_CATEGORY.to_string(),
            strict_categories: false,
            top_n: DEFAULT_TOP_N,
            currency: CurrencyFormat::default(),
        }
    }
}

impl LedgerConfig {
    /// Load from an explicit path, the data-dir override, or the embedded default
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let override_path = path.map(Path::to_path_buf).or_else(default_config_path);

        let content = match override_path {
            Some(ref path) if path.exists() => {
                debug!(path = %path.display(), "Loading ledger config");
                fs::read_to_string(path)
                    .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?
            }
            _ => DEFAULT_CONFIG.to_string(),
        };

        Self::parse(&content)
    }

    /// Parse config from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

        let mut config = Self::default();

        if let Some(categories) = raw.categories {
            if let Some(defaults) = categories.defaults {
                if defaults.iter().all(|c| c.trim().is_empty()) {
                    return Err(Error::Config(
                        "categories.defaults must name at least one category".to_string(),
                    ));
                }
                config.default_categories = defaults;
            }
            if let Some(fallback) = categories.fallback {
                if fallback.trim().is_empty() {
                    return Err(Error::Config(
                        "categories.fallback must not be empty".to_string(),
                    ));
                }
                config.fallback_category = fallback;
            }
            if let Some(strict) = categories.strict {
                config.strict_categories = strict;
            }
        }

        if let Some(reports) = raw.reports {
            if let Some(top_n) = reports.top_n {
                config.top_n = top_n;
            }
        }

        if let Some(currency) = raw.currency {
            if let Some(symbol) = currency.symbol {
                config.currency.symbol = symbol;
            }
            if let Some(grouping) = currency.grouping {
                config.currency.grouping = grouping
                    .parse::<Grouping>()
                    .map_err(|e| Error::Config(format!("Invalid currency.grouping: {}", e)))?;
            }
        }

        Ok(config)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("spendlog").join("config").join("ledger.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    categories: Option<RawCategories>,
    reports: Option<RawReports>,
    currency: Option<RawCurrency>,
}

#[derive(Debug, Deserialize)]
struct RawCategories {
    defaults: Option<Vec<String>>,
    fallback: Option<String>,
    strict: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawReports {
    top_n: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct RawCurrency {
    symbol: Option<String>,
    grouping: Option<String>,
}
