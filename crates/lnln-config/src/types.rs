// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Type-safe configuration structures.
//!
//! Angles are configured in degrees (the convention of the experimental
//! paradigm) and converted to radians where the model is assembled. The
//! defaults reproduce the reference parameterization of the published
//! single-subunit model (Rmax = 11.3, C50 = 0.5, zero spontaneous rate).

use serde::{Deserialize, Serialize};

/// Complete LNLN configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LnlnConfig {
    pub stimulus: StimulusConfig,
    pub harness: HarnessConfig,
    pub model: ModelsConfig,
}

/// Fixed test-grating and cycle-sampling parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StimulusConfig {
    /// Spatial frequency in spatial units per cycle
    pub spatial_frequency: f32,
    /// Phase steps sampled over one full cycle
    pub steps: usize,
    /// Test grating orientation in degrees
    pub test_orientation_deg: f32,
    /// Test grating contrast in [0, 1]
    pub test_contrast: f32,
    /// Test grating static phase offset in degrees
    pub test_phase_deg: f32,
}

impl Default for StimulusConfig {
    fn default() -> Self {
        StimulusConfig {
            spatial_frequency: 50.0,
            steps: 720,
            test_orientation_deg: 0.0,
            test_contrast: 0.48,
            test_phase_deg: 0.0,
        }
    }
}

/// Mask sweep of the paired-orientation paradigm
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Mask orientations in degrees
    pub mask_orientations_deg: Vec<f32>,
    /// Mask contrasts in [0, 1]
    pub mask_contrasts: Vec<f32>,
    /// Phase offset of the mask against the test, in degrees
    pub relative_phase_deg: f32,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            mask_orientations_deg: vec![90.0],
            mask_contrasts: vec![0.12, 0.24, 0.48, 0.96],
            relative_phase_deg: 0.0,
        }
    }
}

/// The two fitted model variants under comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    pub baseline: ModelConfig,
    pub on_off: ModelConfig,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        ModelsConfig {
            baseline: ModelConfig {
                spontaneous_rate: 0.0,
                subunits: vec![SubunitConfig::default()],
            },
            on_off: ModelConfig {
                spontaneous_rate: 0.0,
                subunits: vec![
                    SubunitConfig {
                        weight: 0.5,
                        ..SubunitConfig::default()
                    },
                    SubunitConfig {
                        polarity: PolarityConfig::Off,
                        weight: 0.5,
                        ..SubunitConfig::default()
                    },
                ],
            },
        }
    }
}

/// One fitted model instance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Spontaneous (background) firing rate, added after the output
    /// rectifier; must be non-negative
    pub spontaneous_rate: f32,
    pub subunits: Vec<SubunitConfig>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            spontaneous_rate: 0.0,
            subunits: vec![SubunitConfig::default()],
        }
    }
}

/// Pathway polarity of a configured subunit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolarityConfig {
    On,
    Off,
    OnOff,
}

/// One fitted LGN subunit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubunitConfig {
    /// Receptive-field center, (x, y) in spatial units from the frame center
    pub center: [f32; 2],
    pub polarity: PolarityConfig,
    /// Combination weight (sign and magnitude are fitted)
    pub weight: f32,
    pub contrast_response: ContrastResponseConfig,
}

impl Default for SubunitConfig {
    fn default() -> Self {
        SubunitConfig {
            center: [0.0, 0.0],
            polarity: PolarityConfig::On,
            weight: 1.0,
            contrast_response: ContrastResponseConfig::default(),
        }
    }
}

/// Functional form of a contrast-response function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContrastResponseKind {
    Linear,
    Logarithmic,
    Power,
    Hyperbolic,
}

/// Fitted contrast-response parameters.
///
/// Field meaning depends on `kind`; unused fields are ignored:
/// - `linear`: `gain * c + offset`
/// - `logarithmic`: `gain * log10(c) + offset`
/// - `power`: `gain * c^exponent + offset`
/// - `hyperbolic`: `gain * c^exponent / (c^exponent + c50^exponent) + offset`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastResponseConfig {
    pub kind: ContrastResponseKind,
    pub gain: f32,
    pub offset: f32,
    pub c50: f32,
    pub exponent: f32,
}

impl Default for ContrastResponseConfig {
    fn default() -> Self {
        ContrastResponseConfig {
            kind: ContrastResponseKind::Hyperbolic,
            gain: 11.3,
            offset: 0.0,
            c50: 0.5,
            exponent: 1.0,
        }
    }
}
