// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Loading is a 3-tier process:
//! 1. TOML file (base values)
//! 2. Environment variables (runtime overrides)
//! 3. Validation

use crate::{validate_config, ConfigError, ConfigResult, LnlnConfig};
use std::env;
use std::fs;
use std::path::PathBuf;

/// File name searched for when no explicit path is given
pub const CONFIG_FILE_NAME: &str = "lnln_configuration.toml";

/// Environment variable naming an explicit config file location
pub const CONFIG_PATH_ENV: &str = "LNLN_CONFIG_PATH";

/// Find the LNLN configuration file
///
/// Search order:
/// 1. `LNLN_CONFIG_PATH` environment variable
/// 2. Current working directory: `./lnln_configuration.toml`
/// 3. Parent directories (up to 5 levels, for workspace roots)
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any
/// location.
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        } else {
            return Err(ConfigError::FileNotFound(format!(
                "Config file specified by {} not found: {}",
                CONFIG_PATH_ENV,
                path.display()
            )));
        }
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
        let mut current = cwd;
        for _ in 0..5 {
            match current.parent() {
                Some(parent) => {
                    search_paths.push(parent.join(CONFIG_FILE_NAME));
                    current = parent.to_path_buf();
                }
                None => break,
            }
        }
    }

    for path in &search_paths {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");
    Err(ConfigError::FileNotFound(format!(
        "LNLN configuration file '{}' not found in any of these locations:\n{}\n\nSet {} to specify a custom location.",
        CONFIG_FILE_NAME, search_list, CONFIG_PATH_ENV
    )))
}

/// Load, override and validate a configuration.
///
/// When `path` is `None` the file is discovered via [`find_config_file`].
pub fn load_config(path: Option<PathBuf>) -> ConfigResult<LnlnConfig> {
    let path = match path {
        Some(path) => path,
        None => find_config_file()?,
    };
    let contents = fs::read_to_string(&path)?;
    let mut config: LnlnConfig = toml::from_str(&contents)?;
    apply_environment_overrides(&mut config)?;
    validate_config(&config)?;
    Ok(config)
}

/// Apply environment variable overrides on top of file values.
///
/// Supported overrides:
/// - `LNLN_STEPS`: phase steps per cycle
/// - `LNLN_SPATIAL_FREQUENCY`: spatial frequency
/// - `LNLN_TEST_CONTRAST`: test grating contrast
pub fn apply_environment_overrides(config: &mut LnlnConfig) -> ConfigResult<()> {
    if let Ok(value) = env::var("LNLN_STEPS") {
        config.stimulus.steps = value.parse().map_err(|_| {
            ConfigError::InvalidValue(format!("LNLN_STEPS: '{}' is not an integer", value))
        })?;
    }
    if let Ok(value) = env::var("LNLN_SPATIAL_FREQUENCY") {
        config.stimulus.spatial_frequency = value.parse().map_err(|_| {
            ConfigError::InvalidValue(format!(
                "LNLN_SPATIAL_FREQUENCY: '{}' is not a number",
                value
            ))
        })?;
    }
    if let Ok(value) = env::var("LNLN_TEST_CONTRAST") {
        config.stimulus.test_contrast = value.parse().map_err(|_| {
            ConfigError::InvalidValue(format!(
                "LNLN_TEST_CONTRAST: '{}' is not a number",
                value
            ))
        })?;
    }
    Ok(())
}
