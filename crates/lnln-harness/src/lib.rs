// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Cross-orientation evaluation harness
//!
//! Evaluates fitted model instances against the paired-orientation masking
//! paradigm: a mask grating at varying orientation and contrast is
//! superimposed on a fixed test grating, and interaction metrics (masking
//! index, selectivity index, F1 modulation) are computed per condition.
//!
//! The central correctness requirement is metric uniformity: every model
//! variant flows through the same evaluation and metric code path, so the
//! baseline-vs-on/off comparison never privileges a variant. That is why
//! [`comparison::compare_models`] is implemented as two calls to the same
//! [`comparison::evaluate_model`].
//!
//! Batch evaluation across conditions is rayon-parallel purely for
//! throughput: conditions are independent and the output order always
//! matches the condition order.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod comparison;
pub mod conditions;
pub mod metrics;
pub mod setup;

pub use comparison::{compare_models, evaluate_model, ConditionResponse, ModelComparison};
pub use conditions::{ConditionGrid, MaskCondition};
pub use metrics::{f1_modulation, f1_modulation_relative, masking_index, selectivity_index};
pub use setup::{grid_from_config, neuron_from_config};
