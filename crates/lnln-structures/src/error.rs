// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for LNLN operations

/// Error type shared by the stimulus, kernel, model and harness layers.
///
/// The cascade is a pure numerical pipeline, so the only failure modes are
/// malformed inputs (caught by validating constructors) and non-finite
/// values escaping a stage (caught once per evaluated sample).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LnlnError {
    /// Kernel and stimulus frame do not share a compatible shape
    #[error("dimension mismatch: kernel is {kernel}x{kernel}, frame is {frame_rows}x{frame_cols}")]
    DimensionMismatch {
        kernel: usize,
        frame_rows: usize,
        frame_cols: usize,
    },

    /// A fitted parameter was NaN or infinite
    #[error("non-finite parameter '{name}': {value}")]
    NonFiniteParameter { name: &'static str, value: f32 },

    /// A parameter was finite but outside its valid domain
    #[error("invalid parameter '{name}': {reason}")]
    BadParameter {
        name: &'static str,
        reason: String,
    },

    /// A drive or rate sample came out NaN or infinite mid-cascade
    #[error("non-finite drive at cycle phase {phase} rad")]
    NonFiniteDrive { phase: f32 },

    /// A model instance was built with no subunits
    #[error("model instance has no subunits")]
    EmptyModel,
}

/// Result type for LNLN operations
pub type LnlnResult<T> = Result<T, LnlnError>;

impl LnlnError {
    /// Check a fitted parameter for NaN/Inf before it enters the cascade.
    pub fn ensure_finite(name: &'static str, value: f32) -> LnlnResult<()> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(LnlnError::NonFiniteParameter { name, value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite_accepts_ordinary_values() {
        assert!(LnlnError::ensure_finite("weight", 0.0).is_ok());
        assert!(LnlnError::ensure_finite("weight", -3.25).is_ok());
    }

    #[test]
    fn test_ensure_finite_rejects_nan_and_inf() {
        assert!(LnlnError::ensure_finite("gain", f32::NAN).is_err());
        assert!(LnlnError::ensure_finite("gain", f32::INFINITY).is_err());
        assert!(LnlnError::ensure_finite("gain", f32::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_dimension_mismatch_message_names_both_shapes() {
        let err = LnlnError::DimensionMismatch {
            kernel: 256,
            frame_rows: 128,
            frame_cols: 256,
        };
        let msg = err.to_string();
        assert!(msg.contains("256x256"), "message should name kernel shape");
        assert!(msg.contains("128x256"), "message should name frame shape");
    }
}
