//! # Console Error Types
//!
//! Everything that can stop the console, and how it maps from lower layers.
//!
//! ## Error Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Source                         │  AppError                             │
//! │  ──────                         │  ────────                             │
//! │  std::io::Error (config read)   │  ConfigRead { path, source }          │
//! │  toml::de::Error                │  ConfigParse                          │
//! │  bad config values              │  InvalidConfig                        │
//! │  InquireError (Ctrl-C)          │  Interrupted  (clean exit)            │
//! │  InquireError (other)           │  Prompt                               │
//! │  CoreError / ValidationError    │  Core / Validation                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Esc on a prompt is not an error: menus treat it as "go back".

use std::path::PathBuf;

use inquire::InquireError;
use supply_core::{CoreError, ValidationError};
use thiserror::Error;

/// Console application errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file exists but could not be read.
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`ConsoleConfig`](crate::config::ConsoleConfig).
    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config parsed but holds unusable values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Logging could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// User pressed Ctrl-C.
    #[error("Interrupted")]
    Interrupted,

    /// The terminal prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(InquireError),

    /// Domain error from supply-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Rejected registration input.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<InquireError> for AppError {
    fn from(err: InquireError) -> Self {
        match err {
            InquireError::OperationInterrupted => AppError::Interrupted,
            other => AppError::Prompt(other),
        }
    }
}

/// Result type for console operations.
pub type AppResult<T> = Result<T, AppError>;
