// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! LGN subunits: one linear filter paired with one static nonlinearity.
//!
//! Two filter paths exist, mirroring the two stimulus views:
//!
//! - [`PointSubunit`] evaluates the analytic sinusoid at its receptive-field
//!   center and scales it by a fitted contrast-response function. Plaids are
//!   combined as contrast phasors (vector sum of the component sinusoids)
//!   before sampling, so mask and test interact the way superimposed
//!   luminance actually does.
//! - [`SpatialSubunit`] renders the stimulus to a luminance frame and
//!   correlates it with a spatial receptive-field kernel.
//!
//! Polarity selects the pathway type: `On` responds to luminance
//! increments, `Off` to decrements (sign-inverted filter), `OnOff` is the
//! full-wave relay combination of both.

use lnln_structures::{
    GratingStimulus, LnlnError, LnlnResult, ReceptiveFieldKernel, Stimulus,
};

use crate::nonlinearity::{relu, ContrastResponse};

/// Pathway polarity of a subunit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Responds to luminance increments
    On,
    /// Responds to luminance decrements (sign-inverted filter)
    Off,
    /// Full-wave relay pathway (on + off combined before rectification)
    OnOff,
}

impl Polarity {
    /// Apply this polarity to a signed luminance drive.
    #[inline]
    pub fn apply(self, drive: f32) -> f32 {
        match self {
            Polarity::On => drive,
            Polarity::Off => -drive,
            Polarity::OnOff => drive.abs(),
        }
    }
}

/// Point-model LGN subunit: the receptive field collapsed to its center.
///
/// The luminance seen by the subunit under a drifting stimulus is the
/// closed-form sinusoid at the center location, so no pixel rendering is
/// needed on this path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSubunit {
    center: (f32, f32),
    contrast_response: ContrastResponse,
    polarity: Polarity,
}

impl PointSubunit {
    pub fn new(
        center: (f32, f32),
        contrast_response: ContrastResponse,
        polarity: Polarity,
    ) -> LnlnResult<Self> {
        LnlnError::ensure_finite("center.x", center.0)?;
        LnlnError::ensure_finite("center.y", center.1)?;
        Ok(PointSubunit {
            center,
            contrast_response,
            polarity,
        })
    }

    #[inline]
    pub fn center(&self) -> (f32, f32) {
        self.center
    }

    #[inline]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    #[inline]
    pub fn contrast_response(&self) -> &ContrastResponse {
        &self.contrast_response
    }

    /// Same subunit with the opposite pathway sign. `OnOff` is its own
    /// counterpart.
    pub fn counterpart(&self) -> PointSubunit {
        let polarity = match self.polarity {
            Polarity::On => Polarity::Off,
            Polarity::Off => Polarity::On,
            Polarity::OnOff => Polarity::OnOff,
        };
        PointSubunit { polarity, ..*self }
    }

    /// Combine the stimulus components as contrast phasors at this
    /// subunit's center, returning `(luminance, effective_contrast)` at the
    /// given cycle phase.
    ///
    /// For a single grating this reduces to `(2 sin(phi0 + phase), c)`; for
    /// a plaid the component contrasts add as vectors, so the effective
    /// contrast depends on the spatial phase difference between the
    /// components at the center.
    fn sample(&self, components: &[GratingStimulus], cycle_phase: f32) -> (f32, f32) {
        let (x, y) = self.center;
        let mut real = 0.0f32;
        let mut imaginary = 0.0f32;
        for grating in components {
            let spatial_phase = grating.spatial_phase_at(x, y);
            real += grating.contrast().get() * spatial_phase.cos();
            imaginary += grating.contrast().get() * spatial_phase.sin();
        }
        let effective_contrast = (real * real + imaginary * imaginary).sqrt();
        let angle = imaginary.atan2(real);
        let luminance = 2.0 * (angle + cycle_phase).sin();
        (luminance, effective_contrast)
    }

    /// Rectified subunit output at one cycle phase.
    pub fn output(&self, stimulus: &Stimulus, cycle_phase: f32) -> f32 {
        let (luminance, effective_contrast) = self.sample(stimulus.components(), cycle_phase);
        let amplitude = self.contrast_response.evaluate(effective_contrast);
        relu(amplitude * self.polarity.apply(luminance))
    }
}

/// Image-domain LGN subunit: a spatial kernel correlated against rendered
/// stimulus frames.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialSubunit {
    kernel: ReceptiveFieldKernel,
    polarity: Polarity,
}

impl SpatialSubunit {
    pub fn new(kernel: ReceptiveFieldKernel, polarity: Polarity) -> SpatialSubunit {
        SpatialSubunit { kernel, polarity }
    }

    #[inline]
    pub fn kernel(&self) -> &ReceptiveFieldKernel {
        &self.kernel
    }

    #[inline]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Rectified subunit output at one cycle phase. Renders the stimulus on
    /// the kernel's own pixel grid, so the shapes always agree here; the
    /// dimensionality check still guards externally supplied frames going
    /// through [`ReceptiveFieldKernel::correlate`] directly.
    pub fn output(&self, stimulus: &Stimulus, cycle_phase: f32) -> LnlnResult<f32> {
        let frame = stimulus.render(self.kernel.grid_size(), cycle_phase);
        let drive = self.kernel.correlate(&frame)?;
        Ok(relu(self.polarity.apply(drive)))
    }
}

/// One subunit of a model instance, either filter path.
#[derive(Debug, Clone, PartialEq)]
pub enum Subunit {
    Point(PointSubunit),
    Spatial(SpatialSubunit),
}

impl Subunit {
    /// Rectified subunit output at one cycle phase.
    pub fn output(&self, stimulus: &Stimulus, cycle_phase: f32) -> LnlnResult<f32> {
        match self {
            Subunit::Point(subunit) => Ok(subunit.output(stimulus, cycle_phase)),
            Subunit::Spatial(subunit) => subunit.output(stimulus, cycle_phase),
        }
    }
}

impl From<PointSubunit> for Subunit {
    fn from(subunit: PointSubunit) -> Self {
        Subunit::Point(subunit)
    }
}

impl From<SpatialSubunit> for Subunit {
    fn from(subunit: SpatialSubunit) -> Self {
        Subunit::Spatial(subunit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lnln_structures::{Contrast, PlaidStimulus};
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    fn centered_on_subunit() -> PointSubunit {
        PointSubunit::new((0.0, 0.0), ContrastResponse::reference(), Polarity::On).unwrap()
    }

    fn grating(contrast: f32, phase: f32) -> GratingStimulus {
        GratingStimulus::new(0.0, Contrast::new(contrast).unwrap(), 50.0, phase).unwrap()
    }

    #[test]
    fn test_point_subunit_rejects_non_finite_center() {
        assert!(
            PointSubunit::new((f32::NAN, 0.0), ContrastResponse::reference(), Polarity::On)
                .is_err()
        );
    }

    #[test]
    fn test_on_subunit_matches_closed_form() {
        let subunit = centered_on_subunit();
        let stimulus = Stimulus::from(grating(0.48, 0.0));
        // Centered subunit, zero phase offset: output = relu(R(c) * 2 sin(phase)).
        let amplitude = ContrastResponse::reference().evaluate(0.48);
        for step in 0..8 {
            let phase = step as f32 / 8.0 * TAU;
            let expected = (amplitude * 2.0 * phase.sin()).max(0.0);
            let got = subunit.output(&stimulus, phase);
            assert!(
                (got - expected).abs() < 1e-4,
                "phase {}: got {}, expected {}",
                phase,
                got,
                expected
            );
        }
    }

    #[test]
    fn test_off_subunit_is_half_cycle_shifted_on() {
        let on = centered_on_subunit();
        let off = on.counterpart();
        assert_eq!(off.polarity(), Polarity::Off);
        let stimulus = Stimulus::from(grating(0.48, 0.0));
        for step in 0..16 {
            let phase = step as f32 / 16.0 * TAU;
            let a = on.output(&stimulus, phase + PI);
            let b = off.output(&stimulus, phase);
            assert!((a - b).abs() < 1e-4);
        }
    }

    #[test]
    fn test_onoff_subunit_is_sum_of_on_and_off() {
        let on = centered_on_subunit();
        let off = on.counterpart();
        let onoff =
            PointSubunit::new((0.0, 0.0), ContrastResponse::reference(), Polarity::OnOff).unwrap();
        let stimulus = Stimulus::from(grating(0.7, 0.4));
        for step in 0..16 {
            let phase = step as f32 / 16.0 * TAU;
            let full_wave = onoff.output(&stimulus, phase);
            let split = on.output(&stimulus, phase) + off.output(&stimulus, phase);
            assert!(
                (full_wave - split).abs() < 1e-4,
                "full-wave and split pathways should agree"
            );
        }
    }

    #[test]
    fn test_zero_contrast_silences_subunit() {
        let subunit = centered_on_subunit();
        let stimulus = Stimulus::from(grating(0.0, 0.0));
        for step in 0..8 {
            let phase = step as f32 / 8.0 * TAU;
            assert_eq!(subunit.output(&stimulus, phase), 0.0);
        }
    }

    #[test]
    fn test_aligned_plaid_components_add_their_contrasts() {
        // Both components have zero spatial phase at the origin, so their
        // phasors align and the effective contrast is the plain sum.
        let subunit = centered_on_subunit();
        let plaid = Stimulus::from(PlaidStimulus::superimpose(
            grating(0.3, 0.0),
            GratingStimulus::new(
                FRAC_PI_2,
                Contrast::new(0.2).unwrap(),
                50.0,
                0.0,
            )
            .unwrap(),
        ));
        let combined = Stimulus::from(grating(0.5, 0.0));
        for step in 0..8 {
            let phase = step as f32 / 8.0 * TAU;
            let a = subunit.output(&plaid, phase);
            let b = subunit.output(&combined, phase);
            assert!((a - b).abs() < 1e-4, "phase {}: {} vs {}", phase, a, b);
        }
    }

    #[test]
    fn test_spatial_subunit_silent_on_blank_frame() {
        let kernel = lnln_structures::ReceptiveFieldKernel::generate(
            &lnln_structures::KernelSpec {
                grid_size: 33,
                blob_size: 3.0,
                ..lnln_structures::KernelSpec::default()
            },
        )
        .unwrap();
        let subunit = SpatialSubunit::new(kernel, Polarity::On);
        let blank = Stimulus::from(grating(0.0, 0.0));
        let output = subunit.output(&blank, 0.5).unwrap();
        assert_eq!(output, 0.0);
    }

    #[test]
    fn test_spatial_on_and_off_partition_the_drive() {
        let kernel = lnln_structures::ReceptiveFieldKernel::generate(
            &lnln_structures::KernelSpec {
                grid_size: 33,
                blob_size: 3.0,
                ..lnln_structures::KernelSpec::default()
            },
        )
        .unwrap();
        let on = SpatialSubunit::new(kernel.clone(), Polarity::On);
        let off = SpatialSubunit::new(kernel.clone(), Polarity::Off);
        let stimulus = Stimulus::from(
            GratingStimulus::new(0.0, Contrast::new(1.0).unwrap(), 16.0, 0.0).unwrap(),
        );
        for step in 0..8 {
            let phase = step as f32 / 8.0 * TAU;
            let frame = stimulus.render(33, phase);
            let drive = kernel.correlate(&frame).unwrap();
            let on_out = on.output(&stimulus, phase).unwrap();
            let off_out = off.output(&stimulus, phase).unwrap();
            // Exactly one pathway carries the signed drive.
            assert!((on_out - off_out - drive).abs() < 1e-3);
            assert!(on_out >= 0.0 && off_out >= 0.0);
        }
    }
}
