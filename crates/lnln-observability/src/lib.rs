// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # lnln-observability
//!
//! Unified observability infrastructure for LNLN (logging initialization).
//!
//! Provides consistent `tracing` setup across all LNLN crates with
//! per-crate filter targets.
//!
//! ## Features
//! - `file-logging`: file-based log output with a timestamped run folder

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod init;

pub use init::*;

/// `tracing` targets emitted by LNLN code, usable in filter specs
/// (e.g. `info,lnln-harness=debug`)
pub const KNOWN_TARGETS: &[&str] = &["lnln-harness", "compare_models"];
