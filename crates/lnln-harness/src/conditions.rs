// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Paired-orientation stimulus condition grids.
//!
//! A grid fixes the test grating and sweeps the mask grating over a set of
//! orientations and contrasts, matching the cross-orientation masking
//! paradigm: every condition is evaluated as test-alone, mask-alone and
//! plaid (test + mask superimposed).

use lnln_structures::{Contrast, GratingStimulus, LnlnResult, PlaidStimulus, Stimulus};

/// One cell of the condition grid: a mask orientation/contrast pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskCondition {
    /// Mask orientation in radians
    pub orientation: f32,
    /// Mask contrast
    pub contrast: Contrast,
}

/// The standardized paired-orientation condition set.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionGrid {
    test: GratingStimulus,
    mask_orientations: Vec<f32>,
    mask_contrasts: Vec<Contrast>,
    relative_phase: f32,
    steps: usize,
}

impl ConditionGrid {
    pub fn new(
        test: GratingStimulus,
        mask_orientations: Vec<f32>,
        mask_contrasts: Vec<Contrast>,
        relative_phase: f32,
        steps: usize,
    ) -> LnlnResult<ConditionGrid> {
        use lnln_structures::LnlnError;
        LnlnError::ensure_finite("relative_phase", relative_phase)?;
        for orientation in &mask_orientations {
            LnlnError::ensure_finite("mask_orientation", *orientation)?;
        }
        if steps == 0 {
            return Err(LnlnError::BadParameter {
                name: "steps",
                reason: "cycle must be sampled at least once".to_string(),
            });
        }
        if mask_orientations.is_empty() || mask_contrasts.is_empty() {
            return Err(LnlnError::BadParameter {
                name: "mask_conditions",
                reason: "grid needs at least one mask orientation and contrast".to_string(),
            });
        }
        Ok(ConditionGrid {
            test,
            mask_orientations,
            mask_contrasts,
            relative_phase,
            steps,
        })
    }

    #[inline]
    pub fn test(&self) -> &GratingStimulus {
        &self.test
    }

    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    #[inline]
    pub fn relative_phase(&self) -> f32 {
        self.relative_phase
    }

    /// All mask conditions in row-major (orientation-major) order. The
    /// evaluation output follows this order exactly.
    pub fn conditions(&self) -> Vec<MaskCondition> {
        let mut conditions =
            Vec::with_capacity(self.mask_orientations.len() * self.mask_contrasts.len());
        for orientation in &self.mask_orientations {
            for contrast in &self.mask_contrasts {
                conditions.push(MaskCondition {
                    orientation: *orientation,
                    contrast: *contrast,
                });
            }
        }
        conditions
    }

    /// The mask grating for one condition. Shares the test's spatial
    /// frequency; the grid's relative phase offsets it against the test.
    pub fn mask_stimulus(&self, condition: &MaskCondition) -> LnlnResult<GratingStimulus> {
        GratingStimulus::new(
            condition.orientation,
            condition.contrast,
            self.test.spatial_frequency(),
            self.test.phase() + self.relative_phase,
        )
    }

    /// The three stimuli evaluated for one condition:
    /// (test-alone, mask-alone, plaid).
    pub fn stimuli(&self, condition: &MaskCondition) -> LnlnResult<(Stimulus, Stimulus, Stimulus)> {
        let mask = self.mask_stimulus(condition)?;
        Ok((
            Stimulus::Grating(self.test),
            Stimulus::Grating(mask),
            Stimulus::Plaid(PlaidStimulus::superimpose(self.test, mask)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn test_grating() -> GratingStimulus {
        GratingStimulus::new(0.0, Contrast::new(0.48).unwrap(), 50.0, 0.0).unwrap()
    }

    fn contrasts(values: &[f32]) -> Vec<Contrast> {
        values.iter().map(|v| Contrast::new(*v).unwrap()).collect()
    }

    #[test]
    fn test_grid_enumerates_orientation_major() {
        let grid = ConditionGrid::new(
            test_grating(),
            vec![0.0, FRAC_PI_2],
            contrasts(&[0.1, 0.2, 0.3]),
            0.0,
            360,
        )
        .unwrap();
        let conditions = grid.conditions();
        assert_eq!(conditions.len(), 6);
        assert_eq!(conditions[0].orientation, 0.0);
        assert_eq!(conditions[2].contrast.get(), 0.3);
        assert_eq!(conditions[3].orientation, FRAC_PI_2);
        assert_eq!(conditions[3].contrast.get(), 0.1);
    }

    #[test]
    fn test_grid_rejects_empty_sweeps() {
        assert!(ConditionGrid::new(test_grating(), vec![], contrasts(&[0.1]), 0.0, 360).is_err());
        assert!(ConditionGrid::new(test_grating(), vec![0.0], vec![], 0.0, 360).is_err());
        assert!(
            ConditionGrid::new(test_grating(), vec![0.0], contrasts(&[0.1]), 0.0, 0).is_err()
        );
    }

    #[test]
    fn test_mask_inherits_test_spatial_frequency_and_phase() {
        let grid = ConditionGrid::new(
            test_grating(),
            vec![FRAC_PI_2],
            contrasts(&[0.24]),
            0.7,
            360,
        )
        .unwrap();
        let condition = grid.conditions()[0];
        let mask = grid.mask_stimulus(&condition).unwrap();
        assert_eq!(mask.spatial_frequency(), 50.0);
        assert!((mask.phase() - 0.7).abs() < 1e-6);
        assert_eq!(mask.orientation(), FRAC_PI_2);
    }

    #[test]
    fn test_stimuli_triple_shares_the_test() {
        let grid = ConditionGrid::new(
            test_grating(),
            vec![FRAC_PI_2],
            contrasts(&[0.24]),
            0.0,
            360,
        )
        .unwrap();
        let condition = grid.conditions()[0];
        let (test, mask, plaid) = grid.stimuli(&condition).unwrap();
        match (test, mask, plaid) {
            (Stimulus::Grating(t), Stimulus::Grating(m), Stimulus::Plaid(p)) => {
                assert_eq!(p.components()[0], t);
                assert_eq!(p.components()[1], m);
            }
            _ => panic!("unexpected stimulus kinds"),
        }
    }
}
