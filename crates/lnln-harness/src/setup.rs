// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Assembly of model instances and condition grids from configuration.
//!
//! `lnln-config` carries plain fitted values; this module is the only
//! place they are turned into live model objects. Config angles are in
//! degrees, the model works in radians.

use tracing::debug;

use lnln_config::{
    ContrastResponseConfig, ContrastResponseKind, LnlnConfig, ModelConfig, PolarityConfig,
};
use lnln_model::{ContrastResponse, PointSubunit, Polarity, V1Neuron, WeightedSubunit};
use lnln_structures::{Contrast, GratingStimulus, LnlnResult};

use crate::conditions::ConditionGrid;

fn contrast_response(config: &ContrastResponseConfig) -> LnlnResult<ContrastResponse> {
    match config.kind {
        ContrastResponseKind::Linear => ContrastResponse::linear(config.gain, config.offset),
        ContrastResponseKind::Logarithmic => {
            ContrastResponse::logarithmic(config.gain, config.offset)
        }
        ContrastResponseKind::Power => {
            ContrastResponse::power(config.gain, config.offset, config.exponent)
        }
        ContrastResponseKind::Hyperbolic => {
            ContrastResponse::hyperbolic(config.gain, config.offset, config.c50, config.exponent)
        }
    }
}

fn polarity(config: PolarityConfig) -> Polarity {
    match config {
        PolarityConfig::On => Polarity::On,
        PolarityConfig::Off => Polarity::Off,
        PolarityConfig::OnOff => Polarity::OnOff,
    }
}

/// Build one fitted model instance from its config section.
pub fn neuron_from_config(config: &ModelConfig) -> LnlnResult<V1Neuron> {
    let mut subunits = Vec::with_capacity(config.subunits.len());
    for subunit_config in &config.subunits {
        let subunit = PointSubunit::new(
            (subunit_config.center[0], subunit_config.center[1]),
            contrast_response(&subunit_config.contrast_response)?,
            polarity(subunit_config.polarity),
        )?;
        subunits.push(WeightedSubunit::new(subunit, subunit_config.weight));
    }
    debug!(
        target: "lnln-harness",
        "Assembled model instance with {} subunit(s)",
        subunits.len()
    );
    V1Neuron::new(subunits, config.spontaneous_rate)
}

/// Build the paired-orientation condition grid from configuration.
pub fn grid_from_config(config: &LnlnConfig) -> LnlnResult<ConditionGrid> {
    let test = GratingStimulus::new(
        config.stimulus.test_orientation_deg.to_radians(),
        Contrast::new(config.stimulus.test_contrast)?,
        config.stimulus.spatial_frequency,
        config.stimulus.test_phase_deg.to_radians(),
    )?;
    let mask_orientations = config
        .harness
        .mask_orientations_deg
        .iter()
        .map(|deg| deg.to_radians())
        .collect();
    let mask_contrasts = config
        .harness
        .mask_contrasts
        .iter()
        .map(|value| Contrast::new(*value))
        .collect::<LnlnResult<Vec<_>>>()?;
    ConditionGrid::new(
        test,
        mask_orientations,
        mask_contrasts,
        config.harness.relative_phase_deg.to_radians(),
        config.stimulus.steps,
    )
}
