// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Spatial receptive-field kernels for LGN subunits.
//!
//! A kernel is an oriented, possibly eccentric 2-D Gaussian blob on the same
//! pixel grid as rendered stimulus frames. The linear filter stage is a
//! correlation: the drive of a frame is the sum of the pixelwise product of
//! kernel and frame. Off-pathway kernels are the sign-inverted on kernel.

use ndarray::Array2;

use crate::{LnlnError, LnlnResult};

/// Generation parameters for a receptive-field kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelSpec {
    /// Edge length of the square pixel grid
    pub grid_size: usize,
    /// Width of the 1-sigma Gaussian contour along the minor axis, in pixels
    pub blob_size: f32,
    /// Center offset from the frame center, in pixels
    pub center: (f32, f32),
    /// Eccentricity of the Gaussian contour, in [0, 1)
    pub eccentricity: f32,
    /// Orientation of the major axis, in radians
    pub orientation: f32,
    /// Peak sensitivity after normalization
    pub contrast: f32,
    /// Linear scaler applied on top of `blob_size`
    pub spatial_scale: f32,
    /// Normalize the Gaussian to a peak of 1 before applying `contrast`
    pub normalize: bool,
}

impl Default for KernelSpec {
    fn default() -> Self {
        KernelSpec {
            grid_size: 256,
            blob_size: 5.0,
            center: (0.0, 0.0),
            eccentricity: 0.0,
            orientation: 0.0,
            contrast: 1.0,
            spatial_scale: 1.0,
            normalize: true,
        }
    }
}

/// A fixed spatial receptive-field kernel.
///
/// Read-only during simulation; built once per model configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceptiveFieldKernel {
    grid_size: usize,
    weights: Array2<f32>,
}

impl ReceptiveFieldKernel {
    /// Generate a kernel from its spec.
    pub fn generate(spec: &KernelSpec) -> LnlnResult<Self> {
        LnlnError::ensure_finite("blob_size", spec.blob_size)?;
        LnlnError::ensure_finite("center.x", spec.center.0)?;
        LnlnError::ensure_finite("center.y", spec.center.1)?;
        LnlnError::ensure_finite("eccentricity", spec.eccentricity)?;
        LnlnError::ensure_finite("orientation", spec.orientation)?;
        LnlnError::ensure_finite("kernel_contrast", spec.contrast)?;
        LnlnError::ensure_finite("spatial_scale", spec.spatial_scale)?;
        if spec.grid_size == 0 {
            return Err(LnlnError::BadParameter {
                name: "grid_size",
                reason: "kernel grid must have at least one pixel".to_string(),
            });
        }
        if spec.blob_size <= 0.0 {
            return Err(LnlnError::BadParameter {
                name: "blob_size",
                reason: format!("{} is not strictly positive", spec.blob_size),
            });
        }
        if !(0.0..1.0).contains(&spec.eccentricity) {
            return Err(LnlnError::BadParameter {
                name: "eccentricity",
                reason: format!("{} is outside [0, 1)", spec.eccentricity),
            });
        }

        // Inverse widths of the Gaussian along the rotated axes. The minor
        // axis shrinks with eccentricity.
        let inv_minor = spec.spatial_scale / spec.blob_size;
        let inv_major = ((1.0 - spec.eccentricity * spec.eccentricity)
            * inv_minor
            * inv_minor)
            .sqrt();

        let (sin_o, cos_o) = spec.orientation.sin_cos();
        let frame_center = (1.0 + spec.grid_size as f32) / 2.0;

        let mut weights = Array2::from_shape_fn(
            (spec.grid_size, spec.grid_size),
            |(row, col)| {
                let x = (col as f32 + 1.0) - frame_center - spec.center.0;
                let y = (row as f32 + 1.0) - frame_center - spec.center.1;
                let rotated_x = (cos_o * x + sin_o * y) * spec.spatial_scale;
                let rotated_y = (-sin_o * x + cos_o * y) * spec.spatial_scale;
                (-(rotated_x * rotated_x * inv_major * inv_major
                    + rotated_y * rotated_y * inv_minor * inv_minor)
                    / 2.0)
                    .exp()
            },
        );

        if spec.normalize {
            let peak = weights.iter().fold(f32::MIN, |max, w| max.max(*w));
            if peak > 0.0 {
                weights.mapv_inplace(|w| w / peak);
            }
        }
        weights.mapv_inplace(|w| w * spec.contrast);

        Ok(ReceptiveFieldKernel {
            grid_size: spec.grid_size,
            weights,
        })
    }

    #[inline]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn weights(&self) -> &Array2<f32> {
        &self.weights
    }

    /// Sign-inverted copy of this kernel (the off-pathway counterpart).
    pub fn inverted(&self) -> ReceptiveFieldKernel {
        ReceptiveFieldKernel {
            grid_size: self.grid_size,
            weights: self.weights.mapv(|w| -w),
        }
    }

    /// Linear filter stage: correlate this kernel with one stimulus frame,
    /// producing a scalar drive.
    ///
    /// Fails fast with `DimensionMismatch` when the frame is not on the
    /// kernel's pixel grid.
    pub fn correlate(&self, frame: &Array2<f32>) -> LnlnResult<f32> {
        let (rows, cols) = frame.dim();
        if rows != self.grid_size || cols != self.grid_size {
            return Err(LnlnError::DimensionMismatch {
                kernel: self.grid_size,
                frame_rows: rows,
                frame_cols: cols,
            });
        }
        Ok(self
            .weights
            .iter()
            .zip(frame.iter())
            .map(|(w, v)| w * v)
            .sum())
    }
}
