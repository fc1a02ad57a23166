// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # LNLN - cascade model of cross-orientation suppression in mouse V1
//!
//! An LNLN (linear-nonlinear-linear-nonlinear) cascade that maps oriented
//! grating and plaid stimuli to predicted V1 firing rates, with separate
//! on and off LGN subunit pathways, plus the paired-orientation evaluation
//! harness used to compare the single-subunit baseline against the on/off
//! variant.
//!
//! ## Quick start
//!
//! ```rust
//! use lnln::prelude::*;
//!
//! // The reference single-subunit model
//! let subunit = PointSubunit::new(
//!     (0.0, 0.0),
//!     ContrastResponse::reference(),
//!     Polarity::On,
//! ).unwrap();
//! let baseline = V1Neuron::baseline(subunit, 0.0).unwrap();
//!
//! // A 48%-contrast test grating, one full cycle at 360 phase steps
//! let test = GratingStimulus::new(
//!     0.0,
//!     Contrast::new(0.48).unwrap(),
//!     50.0,
//!     0.0,
//! ).unwrap();
//! let response = baseline
//!     .response_cycle(&Stimulus::Grating(test), 360)
//!     .unwrap();
//! assert!(response.mean_rate() > 0.0);
//! ```
//!
//! ## Workspace members
//!
//! - `lnln-structures`: stimuli, receptive-field kernels, errors
//! - `lnln-model`: nonlinearities, subunits, the V1 cascade
//! - `lnln-harness`: condition grids, interaction metrics, comparison
//! - `lnln-config`: TOML configuration for fitted parameters and sweeps
//! - `lnln-observability`: `tracing` initialization

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use lnln_config as config;
pub use lnln_harness as harness;
pub use lnln_model as model;
pub use lnln_observability as observability;
pub use lnln_structures as structures;

/// Commonly used items
pub mod prelude {
    pub use lnln_config::{load_config, LnlnConfig};
    pub use lnln_harness::{
        compare_models, evaluate_model, f1_modulation, grid_from_config, masking_index,
        neuron_from_config, selectivity_index, ConditionGrid, ConditionResponse, MaskCondition,
        ModelComparison,
    };
    pub use lnln_model::{
        relu, ContrastResponse, CycleResponse, PointSubunit, Polarity, SpatialSubunit, Subunit,
        V1Neuron, WeightedSubunit,
    };
    pub use lnln_observability::init_logging;
    pub use lnln_structures::{
        Contrast, GratingStimulus, KernelSpec, LnlnError, LnlnResult, PlaidStimulus,
        ReceptiveFieldKernel, Stimulus,
    };
}
