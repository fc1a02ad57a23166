// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Batch model evaluation and the baseline-vs-on/off comparison.

use rayon::prelude::*;
use tracing::{debug, info};

use lnln_model::V1Neuron;
use lnln_structures::{LnlnResult, Stimulus};

use crate::conditions::{ConditionGrid, MaskCondition};
use crate::metrics::{f1_modulation, masking_index, selectivity_index};

/// Responses and metrics for one mask condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionResponse {
    pub condition: MaskCondition,
    /// Mean rate to the test grating alone
    pub test_rate: f32,
    /// Mean rate to the mask grating alone
    pub mask_rate: f32,
    /// Mean rate to the plaid (test + mask superimposed)
    pub plaid_rate: f32,
    /// Masking index of the three mean rates
    pub masking_index: f32,
    /// Selectivity index of test vs mask mean rates
    pub selectivity_index: f32,
    /// F1 modulation amplitude of the plaid cycle response
    pub plaid_f1: f32,
}

/// Metric curves for the two fitted model variants over one grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelComparison {
    pub baseline: Vec<ConditionResponse>,
    pub on_off: Vec<ConditionResponse>,
}

/// Evaluate one fitted model instance over every condition of the grid.
///
/// Conditions are independent, so the sweep is rayon-parallel; the output
/// order always matches [`ConditionGrid::conditions`] regardless of
/// scheduling. The test-alone response is shared by all conditions and
/// computed once.
pub fn evaluate_model(
    model: &V1Neuron,
    grid: &ConditionGrid,
) -> LnlnResult<Vec<ConditionResponse>> {
    let conditions = grid.conditions();
    info!(
        target: "lnln-harness",
        "Evaluating {} subunit(s) over {} mask condition(s), {} phase steps",
        model.subunits().len(),
        conditions.len(),
        grid.steps()
    );

    let test_response =
        model.response_cycle(&Stimulus::Grating(*grid.test()), grid.steps())?;
    let test_rate = test_response.mean_rate();

    conditions
        .par_iter()
        .map(|condition| -> LnlnResult<ConditionResponse> {
            let (_, mask, plaid) = grid.stimuli(condition)?;
            let mask_response = model.response_cycle(&mask, grid.steps())?;
            let plaid_response = model.response_cycle(&plaid, grid.steps())?;

            let mask_rate = mask_response.mean_rate();
            let plaid_rate = plaid_response.mean_rate();
            let result = ConditionResponse {
                condition: *condition,
                test_rate,
                mask_rate,
                plaid_rate,
                masking_index: masking_index(test_rate, mask_rate, plaid_rate),
                selectivity_index: selectivity_index(test_rate, mask_rate),
                plaid_f1: f1_modulation(plaid_response.samples(), 1),
            };
            debug!(
                target: "lnln-harness",
                "mask ori {:.3} rad, contrast {:.2}: MI {:.4}",
                condition.orientation,
                condition.contrast.get(),
                result.masking_index
            );
            Ok(result)
        })
        .collect()
}

/// Evaluate the baseline and on/off variants against the *same* grid
/// through the *same* code path.
///
/// This function is deliberately nothing more than two `evaluate_model`
/// calls: there is no branch anywhere that could treat the variants
/// differently.
pub fn compare_models(
    baseline: &V1Neuron,
    on_off: &V1Neuron,
    grid: &ConditionGrid,
) -> LnlnResult<ModelComparison> {
    info!(target: "lnln-harness", "Comparing baseline and on/off model variants");
    Ok(ModelComparison {
        baseline: evaluate_model(baseline, grid)?,
        on_off: evaluate_model(on_off, grid)?,
    })
}
