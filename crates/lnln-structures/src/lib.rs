// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! The core crate for LNLN. Defines the stimulus and receptive-field data
//! types shared by the cascade model and the evaluation harness.
//!
//! Everything here is immutable once constructed: stimuli are parameter sets
//! that can be sampled analytically or rendered to luminance frames, and
//! kernels are fixed weight grids. Mutation happens nowhere downstream of a
//! validating constructor.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod error;

pub mod descriptors;
pub mod kernel;
pub mod stimulus;

pub use error::{LnlnError, LnlnResult};

pub use descriptors::Contrast;
pub use kernel::{KernelSpec, ReceptiveFieldKernel};
pub use stimulus::{GratingStimulus, PlaidStimulus, Stimulus};
