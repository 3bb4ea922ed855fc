//! # Console Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SUPPLY_LOG=debug                                                   │
//! │     SUPPLY_SEED=false                                                  │
//! │     SUPPLY_MAX_SUGGESTIONS=3                                           │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, else $SUPPLY_CONFIG, else                         │
//! │     ~/.config/supply-tracker/console.toml (Linux)                      │
//! │     ~/Library/Application Support/com.supply.supply-tracker/console.toml│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     seed on with the sample items, 5 suggestions, warn logging         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [seed]
//! enabled = true
//!
//! [[seed.items]]
//! name = "Gaze"
//! quantity = 30
//! expiry = "Validade: 2027-03-01"
//!
//! [search]
//! max_suggestions = 5
//!
//! [log]
//! filter = "warn,supply=info"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use supply_core::resolve::DEFAULT_MAX_SUGGESTIONS;
use supply_core::seed::sample_ledger;
use supply_core::validation::validate_new_item;
use supply_core::{Item, Ledger};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

/// Env var pointing at a config file.
pub const CONFIG_PATH_ENV: &str = "SUPPLY_CONFIG";

// =============================================================================
// Sections
// =============================================================================

/// What the ledger starts with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedSettings {
    /// Start with seed items at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Custom seed items. `None` means the built-in sample items.
    #[serde(default)]
    pub items: Option<Vec<Item>>,
}

fn default_true() -> bool {
    true
}

impl Default for SeedSettings {
    fn default() -> Self {
        SeedSettings {
            enabled: true,
            items: None,
        }
    }
}

/// Name lookup behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Cap on "did you mean" hints after a miss.
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_max_suggestions() -> usize {
    DEFAULT_MAX_SUGGESTIONS
}

impl Default for SearchSettings {
    fn default() -> Self {
        SearchSettings {
            max_suggestions: default_max_suggestions(),
        }
    }
}

/// Logging behavior. `RUST_LOG` still wins over `filter`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSettings {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "warn,supply=info".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Console Configuration
// =============================================================================

/// Complete console configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub seed: SeedSettings,

    #[serde(default)]
    pub search: SearchSettings,

    #[serde(default)]
    pub log: LogSettings,
}

impl ConsoleConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (explicit path, `$SUPPLY_CONFIG`, platform default)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let path = config_path
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Reads and parses one TOML file.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        info!(?path, "Loading console config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.search.max_suggestions == 0 {
            return Err(AppError::InvalidConfig(
                "search.max_suggestions must be greater than 0".into(),
            ));
        }

        for item in self.seed.items.iter().flatten() {
            validate_new_item(item.name(), &item.quantity().to_string(), item.expiry()).map_err(
                |err| AppError::InvalidConfig(format!("seed item '{}': {}", item.name(), err)),
            )?;
        }

        Ok(())
    }

    /// Applies overrides from `lookup` (the environment, in production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(filter) = lookup("SUPPLY_LOG") {
            debug!(filter = %filter, "Overriding log filter from environment");
            self.log.filter = filter;
        }

        if let Some(seed) = lookup("SUPPLY_SEED") {
            match seed.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.seed.enabled = true,
                "0" | "false" | "no" | "off" => self.seed.enabled = false,
                _ => warn!(value = %seed, "Unknown SUPPLY_SEED value"),
            }
        }

        if let Some(max) = lookup("SUPPLY_MAX_SUGGESTIONS") {
            match max.trim().parse::<usize>() {
                Ok(n) => self.search.max_suggestions = n,
                Err(_) => warn!(value = %max, "Invalid SUPPLY_MAX_SUGGESTIONS value"),
            }
        }
    }

    /// Builds the ledger a new session starts with.
    pub fn seed_ledger(&self) -> Ledger {
        if !self.seed.enabled {
            return Ledger::new();
        }
        match &self.seed.items {
            Some(items) => items.iter().cloned().collect(),
            None => sample_ledger(),
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "supply", "supply-tracker")
            .map(|dirs| dirs.config_dir().join("console.toml"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
