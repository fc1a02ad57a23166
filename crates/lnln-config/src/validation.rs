// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Every fitted parameter is checked here before it can reach the cascade:
//! the model layer re-validates at construction, but failing at load time
//! gives the user the file-level context.

use crate::{
    ConfigError, ConfigResult, ContrastResponseConfig, ContrastResponseKind, LnlnConfig,
    ModelConfig,
};

fn ensure_finite(context: &str, name: &str, value: f32) -> ConfigResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{}: '{}' is not finite ({})",
            context, name, value
        )))
    }
}

fn ensure_contrast(context: &str, name: &str, value: f32) -> ConfigResult<()> {
    ensure_finite(context, name, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::ValidationError(format!(
            "{}: '{}' = {} is outside [0, 1]",
            context, name, value
        )));
    }
    Ok(())
}

fn validate_contrast_response(
    context: &str,
    crf: &ContrastResponseConfig,
) -> ConfigResult<()> {
    ensure_finite(context, "contrast_response.gain", crf.gain)?;
    ensure_finite(context, "contrast_response.offset", crf.offset)?;
    ensure_finite(context, "contrast_response.c50", crf.c50)?;
    ensure_finite(context, "contrast_response.exponent", crf.exponent)?;
    match crf.kind {
        ContrastResponseKind::Hyperbolic => {
            if crf.c50 <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{}: hyperbolic c50 must be strictly positive, got {}",
                    context, crf.c50
                )));
            }
            if crf.exponent <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{}: hyperbolic exponent must be strictly positive, got {}",
                    context, crf.exponent
                )));
            }
        }
        ContrastResponseKind::Power => {
            if crf.exponent <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{}: power exponent must be strictly positive, got {}",
                    context, crf.exponent
                )));
            }
        }
        ContrastResponseKind::Linear | ContrastResponseKind::Logarithmic => {}
    }
    Ok(())
}

fn validate_model(context: &str, model: &ModelConfig) -> ConfigResult<()> {
    if model.subunits.is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "{}: model needs at least one subunit",
            context
        )));
    }
    ensure_finite(context, "spontaneous_rate", model.spontaneous_rate)?;
    if model.spontaneous_rate < 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "{}: spontaneous_rate must be non-negative, got {}",
            context, model.spontaneous_rate
        )));
    }
    for (index, subunit) in model.subunits.iter().enumerate() {
        let subunit_context = format!("{}.subunits[{}]", context, index);
        ensure_finite(&subunit_context, "center.x", subunit.center[0])?;
        ensure_finite(&subunit_context, "center.y", subunit.center[1])?;
        ensure_finite(&subunit_context, "weight", subunit.weight)?;
        validate_contrast_response(&subunit_context, &subunit.contrast_response)?;
    }
    Ok(())
}

/// Validate a loaded configuration.
pub fn validate_config(config: &LnlnConfig) -> ConfigResult<()> {
    // Stimulus section
    ensure_finite("stimulus", "spatial_frequency", config.stimulus.spatial_frequency)?;
    if config.stimulus.spatial_frequency <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "stimulus: spatial_frequency must be strictly positive, got {}",
            config.stimulus.spatial_frequency
        )));
    }
    if config.stimulus.steps == 0 {
        return Err(ConfigError::ValidationError(
            "stimulus: steps must be at least 1".to_string(),
        ));
    }
    ensure_finite("stimulus", "test_orientation_deg", config.stimulus.test_orientation_deg)?;
    ensure_finite("stimulus", "test_phase_deg", config.stimulus.test_phase_deg)?;
    ensure_contrast("stimulus", "test_contrast", config.stimulus.test_contrast)?;

    // Harness section
    if config.harness.mask_orientations_deg.is_empty() {
        return Err(ConfigError::ValidationError(
            "harness: mask_orientations_deg must not be empty".to_string(),
        ));
    }
    if config.harness.mask_contrasts.is_empty() {
        return Err(ConfigError::ValidationError(
            "harness: mask_contrasts must not be empty".to_string(),
        ));
    }
    for orientation in &config.harness.mask_orientations_deg {
        ensure_finite("harness", "mask_orientations_deg", *orientation)?;
    }
    for contrast in &config.harness.mask_contrasts {
        ensure_contrast("harness", "mask_contrasts", *contrast)?;
    }
    ensure_finite("harness", "relative_phase_deg", config.harness.relative_phase_deg)?;

    // Model sections
    validate_model("model.baseline", &config.model.baseline)?;
    validate_model("model.on_off", &config.model.on_off)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SubunitConfig;

    #[test]
    fn test_default_passes() {
        validate_config(&LnlnConfig::default()).unwrap();
    }

    #[test]
    fn test_rejects_zero_steps() {
        let mut config = LnlnConfig::default();
        config.stimulus.steps = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_contrast() {
        let mut config = LnlnConfig::default();
        config.harness.mask_contrasts = vec![0.5, 1.2];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_non_finite_weight() {
        let mut config = LnlnConfig::default();
        config.model.baseline.subunits[0].weight = f32::NAN;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("weight"));
    }

    #[test]
    fn test_rejects_empty_subunit_list() {
        let mut config = LnlnConfig::default();
        config.model.on_off.subunits = Vec::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_degenerate_c50() {
        let mut config = LnlnConfig::default();
        let mut subunit = SubunitConfig::default();
        subunit.contrast_response.c50 = 0.0;
        config.model.baseline.subunits = vec![subunit];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_negative_spontaneous_rate() {
        let mut config = LnlnConfig::default();
        config.model.baseline.spontaneous_rate = -0.5;
        assert!(validate_config(&config).is_err());
    }
}
