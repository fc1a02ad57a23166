// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Oriented grating and plaid stimuli.
//!
//! A stimulus is a parameter set, not pixel data. It carries two dual views:
//!
//! - an *analytic* view, sampled by point subunits as a closed-form sinusoid
//!   at the subunit's receptive-field center (see `lnln-model`), and
//! - an *image* view, rendered on demand to a square luminance frame for the
//!   spatial (kernel-correlation) filter path.
//!
//! The temporal dimension is a cycle phase in radians: advancing the phase
//! through one full turn drifts the stimulus through one full cycle.

use std::f32::consts::{FRAC_PI_4, TAU};

use ndarray::Array2;

use crate::descriptors::Contrast;
use crate::{LnlnError, LnlnResult};

/// A drifting sinusoidal grating.
///
/// Orientation is in radians with 0 pointing right; `phase` is a static
/// phase offset added on top of the running cycle phase. Spatial frequency
/// is in spatial units (pixels, for rendered frames) per cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GratingStimulus {
    orientation: f32,
    contrast: Contrast,
    spatial_frequency: f32,
    phase: f32,
}

impl GratingStimulus {
    pub fn new(
        orientation: f32,
        contrast: Contrast,
        spatial_frequency: f32,
        phase: f32,
    ) -> LnlnResult<Self> {
        LnlnError::ensure_finite("orientation", orientation)?;
        LnlnError::ensure_finite("spatial_frequency", spatial_frequency)?;
        LnlnError::ensure_finite("phase", phase)?;
        if spatial_frequency <= 0.0 {
            return Err(LnlnError::BadParameter {
                name: "spatial_frequency",
                reason: format!("{} is not strictly positive", spatial_frequency),
            });
        }
        Ok(GratingStimulus {
            orientation,
            contrast,
            spatial_frequency,
            phase,
        })
    }

    #[inline]
    pub fn orientation(&self) -> f32 {
        self.orientation
    }

    #[inline]
    pub fn contrast(&self) -> Contrast {
        self.contrast
    }

    #[inline]
    pub fn spatial_frequency(&self) -> f32 {
        self.spatial_frequency
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Same grating with a different contrast.
    pub fn with_contrast(&self, contrast: Contrast) -> GratingStimulus {
        GratingStimulus { contrast, ..*self }
    }

    /// Spatial phase of this grating at a point, in radians, excluding the
    /// running cycle phase. The point is given relative to the frame center.
    #[inline]
    pub fn spatial_phase_at(&self, x: f32, y: f32) -> f32 {
        let projection = self.orientation.cos() * x + self.orientation.sin() * y;
        projection / self.spatial_frequency * TAU + self.phase
    }

    /// Render one luminance frame at the given cycle phase.
    ///
    /// The frame is a `grid_size` x `grid_size` array indexed `[row, col]`,
    /// with the coordinate origin at the frame center and luminance in
    /// [-contrast, contrast].
    pub fn render(&self, grid_size: usize, cycle_phase: f32) -> Array2<f32> {
        let center = (1.0 + grid_size as f32) / 2.0;
        Array2::from_shape_fn((grid_size, grid_size), |(row, col)| {
            let x = (col as f32 + 1.0) - center;
            let y = (row as f32 + 1.0) - center;
            self.contrast.get() * (self.spatial_phase_at(x, y) + cycle_phase).sin()
        })
    }
}

/// Two superimposed gratings sharing one running cycle phase.
///
/// The canonical cross-orientation paradigm superimposes a "mask" grating
/// on a "test" grating; any relative phase between the two is carried by
/// the components' own static phase offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaidStimulus {
    components: [GratingStimulus; 2],
}

impl PlaidStimulus {
    /// Superimpose two arbitrary gratings.
    pub fn superimpose(first: GratingStimulus, second: GratingStimulus) -> PlaidStimulus {
        PlaidStimulus {
            components: [first, second],
        }
    }

    /// A symmetric plaid: two components at +/-45 degrees around a joint
    /// orientation, each carrying half the joint contrast. `relative_phase`
    /// offsets the second component against the first.
    pub fn symmetric(
        orientation: f32,
        joint_contrast: Contrast,
        spatial_frequency: f32,
        phase: f32,
        relative_phase: f32,
    ) -> LnlnResult<PlaidStimulus> {
        let half = joint_contrast.halved();
        let first = GratingStimulus::new(orientation - FRAC_PI_4, half, spatial_frequency, phase)?;
        let second = GratingStimulus::new(
            orientation + FRAC_PI_4,
            half,
            spatial_frequency,
            phase + relative_phase,
        )?;
        Ok(PlaidStimulus {
            components: [first, second],
        })
    }

    #[inline]
    pub fn components(&self) -> &[GratingStimulus; 2] {
        &self.components
    }
}

/// A stimulus condition presented to a model instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stimulus {
    Grating(GratingStimulus),
    Plaid(PlaidStimulus),
}

impl Stimulus {
    /// The sinusoidal components of this stimulus (one for a grating, two
    /// for a plaid). Point subunits combine these as contrast phasors.
    pub fn components(&self) -> &[GratingStimulus] {
        match self {
            Stimulus::Grating(grating) => std::slice::from_ref(grating),
            Stimulus::Plaid(plaid) => plaid.components(),
        }
    }

    /// Render one luminance frame at the given cycle phase. A plaid frame
    /// is the pixelwise sum of its component gratings.
    pub fn render(&self, grid_size: usize, cycle_phase: f32) -> Array2<f32> {
        let mut components = self.components().iter();
        // components() is never empty
        let first = components.next().map(|g| g.render(grid_size, cycle_phase));
        let mut frame = first.unwrap_or_else(|| Array2::zeros((grid_size, grid_size)));
        for grating in components {
            frame = frame + grating.render(grid_size, cycle_phase);
        }
        frame
    }
}

impl From<GratingStimulus> for Stimulus {
    fn from(grating: GratingStimulus) -> Self {
        Stimulus::Grating(grating)
    }
}

impl From<PlaidStimulus> for Stimulus {
    fn from(plaid: PlaidStimulus) -> Self {
        Stimulus::Plaid(plaid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn grating(orientation: f32, contrast: f32) -> GratingStimulus {
        GratingStimulus::new(orientation, Contrast::new(contrast).unwrap(), 10.0, 0.0).unwrap()
    }

    #[test]
    fn test_grating_rejects_bad_spatial_frequency() {
        let c = Contrast::new(0.5).unwrap();
        assert!(GratingStimulus::new(0.0, c, 0.0, 0.0).is_err());
        assert!(GratingStimulus::new(0.0, c, -5.0, 0.0).is_err());
        assert!(GratingStimulus::new(0.0, c, f32::NAN, 0.0).is_err());
    }

    #[test]
    fn test_render_shape_and_contrast_bound() {
        let frame = grating(0.3, 0.48).render(32, 0.7);
        assert_eq!(frame.dim(), (32, 32));
        for value in frame.iter() {
            assert!(
                value.abs() <= 0.48 + 1e-6,
                "luminance {} exceeds contrast bound",
                value
            );
        }
    }

    #[test]
    fn test_render_half_cycle_inverts_luminance() {
        let g = grating(PI / 3.0, 1.0);
        let frame_a = g.render(24, 0.4);
        let frame_b = g.render(24, 0.4 + PI);
        for (a, b) in frame_a.iter().zip(frame_b.iter()) {
            assert!((a + b).abs() < 1e-5, "sin(x + pi) should equal -sin(x)");
        }
    }

    #[test]
    fn test_render_scales_linearly_with_contrast() {
        let full = grating(0.0, 1.0).render(16, 0.2);
        let half = grating(0.0, 0.5).render(16, 0.2);
        for (f, h) in full.iter().zip(half.iter()) {
            assert!((f * 0.5 - h).abs() < 1e-6);
        }
    }

    #[test]
    fn test_plaid_frame_is_sum_of_components() {
        let test = grating(0.0, 0.48);
        let mask = grating(PI / 2.0, 0.24);
        let plaid = Stimulus::from(PlaidStimulus::superimpose(test, mask));
        let frame = plaid.render(16, 0.9);
        let expected = test.render(16, 0.9) + mask.render(16, 0.9);
        for (got, want) in frame.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-6);
        }
    }

    #[test]
    fn test_symmetric_plaid_splits_contrast() {
        let plaid = PlaidStimulus::symmetric(
            0.0,
            Contrast::new(0.96).unwrap(),
            10.0,
            0.0,
            0.0,
        )
        .unwrap();
        let [first, second] = plaid.components();
        assert!((first.contrast().get() - 0.48).abs() < 1e-6);
        assert!((second.contrast().get() - 0.48).abs() < 1e-6);
        assert!((second.orientation() - first.orientation() - PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_stimulus_component_counts() {
        let g = grating(0.0, 0.5);
        assert_eq!(Stimulus::from(g).components().len(), 1);
        let plaid = PlaidStimulus::superimpose(g, grating(1.0, 0.2));
        assert_eq!(Stimulus::from(plaid).components().len(), 2);
    }
}
