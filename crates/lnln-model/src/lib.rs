// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # LNLN cascade model
//!
//! The linear-nonlinear-linear-nonlinear cascade that maps an oriented
//! grating or plaid stimulus to a predicted V1 firing rate:
//!
//! ```text
//! Stimulus --> [subunit linear filter] --> [subunit rectification]   (x N subunits)
//!          --> [weighted combination]  --> [output rectification + spontaneous rate]
//!          --> firing rate
//! ```
//!
//! Subunits model LGN relay inputs. The baseline model carries a single
//! subunit; the extended model splits the input into separate on and off
//! pathways (and optionally a full-wave on-off relay pathway).
//!
//! A model instance is immutable after its validating constructor; fitting
//! happens elsewhere and arrives here as plain parameter values.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cascade;
pub mod nonlinearity;
pub mod response;
pub mod subunit;

pub use cascade::{V1Neuron, WeightedSubunit};
pub use nonlinearity::{relu, ContrastResponse};
pub use response::CycleResponse;
pub use subunit::{PointSubunit, Polarity, SpatialSubunit, Subunit};
