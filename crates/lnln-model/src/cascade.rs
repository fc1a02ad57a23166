// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! The convergent V1 neuron: weighted subunit combination plus the output
//! nonlinearity.
//!
//! ```text
//! rate(t) = relu( sum_i w_i * subunit_i(t) ) + spontaneous_rate
//! ```
//!
//! Weights are fitted per subunit identity; a negative weight makes a
//! pathway suppressive. The output rectifier plus a non-negative
//! spontaneous rate guarantee physically valid (non-negative) firing
//! rates, and make the zero-contrast response exactly the spontaneous
//! rate.

use std::f32::consts::TAU;

use lnln_structures::{LnlnError, LnlnResult, Stimulus};

use crate::nonlinearity::relu;
use crate::response::CycleResponse;
use crate::subunit::Subunit;

/// One subunit with its fitted combination weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedSubunit {
    pub subunit: Subunit,
    pub weight: f32,
}

impl WeightedSubunit {
    pub fn new(subunit: impl Into<Subunit>, weight: f32) -> WeightedSubunit {
        WeightedSubunit {
            subunit: subunit.into(),
            weight,
        }
    }
}

/// A fitted model instance: subunits, combination weights and output-stage
/// parameters. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct V1Neuron {
    subunits: Vec<WeightedSubunit>,
    spontaneous_rate: f32,
}

impl V1Neuron {
    /// Build a model instance, validating every fitted parameter.
    pub fn new(subunits: Vec<WeightedSubunit>, spontaneous_rate: f32) -> LnlnResult<V1Neuron> {
        if subunits.is_empty() {
            return Err(LnlnError::EmptyModel);
        }
        for weighted in &subunits {
            LnlnError::ensure_finite("weight", weighted.weight)?;
        }
        LnlnError::ensure_finite("spontaneous_rate", spontaneous_rate)?;
        if spontaneous_rate < 0.0 {
            return Err(LnlnError::BadParameter {
                name: "spontaneous_rate",
                reason: format!("{} is negative", spontaneous_rate),
            });
        }
        Ok(V1Neuron {
            subunits,
            spontaneous_rate,
        })
    }

    /// The single-subunit baseline variant with unit weight.
    pub fn baseline(subunit: impl Into<Subunit>, spontaneous_rate: f32) -> LnlnResult<V1Neuron> {
        V1Neuron::new(vec![WeightedSubunit::new(subunit, 1.0)], spontaneous_rate)
    }

    #[inline]
    pub fn subunits(&self) -> &[WeightedSubunit] {
        &self.subunits
    }

    #[inline]
    pub fn spontaneous_rate(&self) -> f32 {
        self.spontaneous_rate
    }

    /// Predicted firing rate at one cycle phase.
    ///
    /// Fails fast if any stage yields a non-finite value instead of letting
    /// NaN propagate into metrics.
    pub fn response_at(&self, stimulus: &Stimulus, cycle_phase: f32) -> LnlnResult<f32> {
        let mut combined = 0.0f32;
        for weighted in &self.subunits {
            combined += weighted.weight * weighted.subunit.output(stimulus, cycle_phase)?;
        }
        let rate = relu(combined) + self.spontaneous_rate;
        if !rate.is_finite() {
            return Err(LnlnError::NonFiniteDrive { phase: cycle_phase });
        }
        Ok(rate)
    }

    /// Predicted firing rate over one full stimulus cycle sampled at
    /// `steps` uniform phase steps.
    pub fn response_cycle(&self, stimulus: &Stimulus, steps: usize) -> LnlnResult<CycleResponse> {
        if steps == 0 {
            return Err(LnlnError::BadParameter {
                name: "steps",
                reason: "cycle must be sampled at least once".to_string(),
            });
        }
        let mut samples = Vec::with_capacity(steps);
        for step in 0..steps {
            let cycle_phase = step as f32 / steps as f32 * TAU;
            samples.push(self.response_at(stimulus, cycle_phase)?);
        }
        Ok(CycleResponse::new(samples))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nonlinearity::ContrastResponse;
    use crate::subunit::{PointSubunit, Polarity};
    use lnln_structures::{Contrast, GratingStimulus};
    use std::f32::consts::PI;

    fn on_subunit() -> PointSubunit {
        PointSubunit::new((0.0, 0.0), ContrastResponse::reference(), Polarity::On).unwrap()
    }

    fn test_grating(contrast: f32) -> Stimulus {
        Stimulus::from(
            GratingStimulus::new(0.0, Contrast::new(contrast).unwrap(), 50.0, 0.0).unwrap(),
        )
    }

    #[test]
    fn test_empty_model_is_rejected() {
        assert_eq!(
            V1Neuron::new(Vec::new(), 0.0).unwrap_err(),
            LnlnError::EmptyModel
        );
    }

    #[test]
    fn test_non_finite_weight_is_rejected() {
        let result = V1Neuron::new(
            vec![WeightedSubunit::new(on_subunit(), f32::NAN)],
            0.0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_spontaneous_rate_is_rejected() {
        assert!(V1Neuron::baseline(on_subunit(), -1.0).is_err());
    }

    #[test]
    fn test_zero_steps_is_rejected() {
        let neuron = V1Neuron::baseline(on_subunit(), 0.0).unwrap();
        assert!(neuron.response_cycle(&test_grating(0.48), 0).is_err());
    }

    #[test]
    fn test_response_is_non_negative_everywhere() {
        let neuron = V1Neuron::new(
            vec![
                WeightedSubunit::new(on_subunit(), 0.7),
                WeightedSubunit::new(on_subunit().counterpart(), -0.4),
            ],
            0.0,
        )
        .unwrap();
        let response = neuron.response_cycle(&test_grating(0.96), 360).unwrap();
        for rate in response.samples() {
            assert!(*rate >= 0.0, "negative firing rate {}", rate);
        }
    }

    #[test]
    fn test_zero_contrast_yields_spontaneous_rate() {
        let neuron = V1Neuron::baseline(on_subunit(), 2.5).unwrap();
        let response = neuron.response_cycle(&test_grating(0.0), 90).unwrap();
        for rate in response.samples() {
            assert!((rate - 2.5).abs() < 1e-6);
        }
    }

    #[test]
    fn test_mean_rate_matches_rectified_sinusoid_closed_form() {
        // Centered on subunit, weight 1: rate(t) = relu(2 R(c) sin t), so
        // the cycle mean is 2 R(c) / pi.
        let neuron = V1Neuron::baseline(on_subunit(), 0.0).unwrap();
        let contrast = 0.48;
        let response = neuron.response_cycle(&test_grating(contrast), 720).unwrap();
        let amplitude = ContrastResponse::reference().evaluate(contrast);
        let expected = 2.0 * amplitude / PI;
        let got = response.mean_rate();
        assert!(
            (got - expected).abs() < 1e-3 * expected,
            "mean rate {} should match closed form {}",
            got,
            expected
        );
    }

    #[test]
    fn test_zero_weight_off_pathway_recovers_baseline() {
        let baseline = V1Neuron::baseline(on_subunit(), 0.5).unwrap();
        let on_off = V1Neuron::new(
            vec![
                WeightedSubunit::new(on_subunit(), 1.0),
                WeightedSubunit::new(on_subunit().counterpart(), 0.0),
            ],
            0.5,
        )
        .unwrap();
        let stimulus = test_grating(0.7);
        let a = baseline.response_cycle(&stimulus, 360).unwrap();
        let b = on_off.response_cycle(&stimulus, 360).unwrap();
        for (x, y) in a.samples().iter().zip(b.samples().iter()) {
            assert!((x - y).abs() < 1e-6, "baseline {} vs on/off {}", x, y);
        }
    }

    #[test]
    fn test_uniform_weights_recover_subunit_average() {
        // Two identical subunits at weight 0.5 behave like one at weight 1.
        let single = V1Neuron::baseline(on_subunit(), 0.0).unwrap();
        let pair = V1Neuron::new(
            vec![
                WeightedSubunit::new(on_subunit(), 0.5),
                WeightedSubunit::new(on_subunit(), 0.5),
            ],
            0.0,
        )
        .unwrap();
        let stimulus = test_grating(0.48);
        let a = single.response_cycle(&stimulus, 180).unwrap();
        let b = pair.response_cycle(&stimulus, 180).unwrap();
        for (x, y) in a.samples().iter().zip(b.samples().iter()) {
            assert!((x - y).abs() < 1e-5);
        }
    }
}
