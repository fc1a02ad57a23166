// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # LNLN configuration system
//!
//! Type-safe configuration loader for LNLN. Fitting and calibration happen
//! outside this workspace; the fitted kernel, nonlinearity and weight
//! parameters arrive here as a TOML file, get validated, and are consumed
//! read-only by the model and harness layers.
//!
//! Loading order:
//! 1. TOML file (base values; `LnlnConfig::default()` carries the
//!    reference parameterization when a section is omitted)
//! 2. Environment variable overrides
//! 3. Validation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lnln_config::load_config;
//!
//! let config = load_config(None).expect("Failed to load config");
//! println!("phase steps per cycle: {}", config.stimulus.steps);
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{apply_environment_overrides, find_config_file, load_config};
pub use types::*;
pub use validation::validate_config;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found. Searched: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    ParseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
