// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Unified logging initialization for LNLN
//!
//! Console logging always; with the `file-logging` feature enabled, log
//! lines additionally land in a timestamped run folder.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

#[cfg(feature = "file-logging")]
use anyhow::Context;
#[cfg(feature = "file-logging")]
use chrono::Utc;
#[cfg(feature = "file-logging")]
use tracing_appender::rolling;

/// Logging initialization result. Keep this alive for the lifetime of the
/// process; dropping it flushes and closes file writers.
pub struct LoggingGuard {
    #[cfg(feature = "file-logging")]
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
    log_dir: Option<PathBuf>,
}

impl LoggingGuard {
    /// The run folder receiving file logs, when file logging is active.
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

/// Initialize `tracing` for the process.
///
/// # Arguments
/// * `filter` - explicit filter spec (e.g. `"info,lnln-harness=debug"`);
///   falls back to `RUST_LOG`, then to `info`
/// * `log_dir` - base directory for file logs (default `./logs`); only
///   used with the `file-logging` feature
#[cfg_attr(not(feature = "file-logging"), allow(unused_variables))]
pub fn init_logging(filter: Option<&str>, log_dir: Option<PathBuf>) -> Result<LoggingGuard> {
    let filter_spec = match filter {
        Some(spec) => spec.to_string(),
        None => std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
    };

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    // Console layer (human-readable)
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_filter(EnvFilter::new(&filter_spec));
    layers.push(console_layer.boxed());

    #[cfg(feature = "file-logging")]
    let (file_guard, run_dir) = {
        let base_log_dir = log_dir.unwrap_or_else(|| PathBuf::from("./logs"));
        let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
        let run_folder = base_log_dir.join(format!("run_{}", timestamp));
        std::fs::create_dir_all(&run_folder).with_context(|| {
            format!("Failed to create log directory: {}", run_folder.display())
        })?;

        let appender = rolling::never(&run_folder, "lnln.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(non_blocking)
            .with_filter(EnvFilter::new(&filter_spec));
        layers.push(file_layer.boxed());
        (Some(guard), Some(run_folder))
    };

    Registry::default()
        .with(layers)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to initialize tracing subscriber: {}", err))?;

    #[cfg(feature = "file-logging")]
    let guard = LoggingGuard {
        _file_guard: file_guard,
        log_dir: run_dir,
    };
    #[cfg(not(feature = "file-logging"))]
    let guard = LoggingGuard { log_dir: None };

    Ok(guard)
}
