// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Validated scalar descriptors for stimulus parameters.

use crate::{LnlnError, LnlnResult};

/// A stimulus contrast level, constrained to [0, 1].
///
/// Effective contrasts arising *inside* the cascade (for example the phasor
/// magnitude of a plaid, which can reach the sum of its component contrasts)
/// are plain `f32`; this type only polices values entering from outside.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Contrast(f32);

impl Contrast {
    /// Zero contrast (a blank screen).
    pub const ZERO: Contrast = Contrast(0.0);

    /// Full contrast.
    pub const FULL: Contrast = Contrast(1.0);

    /// Create a contrast from a value in [0, 1].
    pub fn new(value: f32) -> LnlnResult<Self> {
        LnlnError::ensure_finite("contrast", value)?;
        if !(0.0..=1.0).contains(&value) {
            return Err(LnlnError::BadParameter {
                name: "contrast",
                reason: format!("{} is outside [0, 1]", value),
            });
        }
        Ok(Contrast(value))
    }

    /// Get the raw contrast value in [0, 1].
    #[inline]
    pub fn get(&self) -> f32 {
        self.0
    }

    /// Halve the contrast. Used when splitting a joint contrast across
    /// the two components of a symmetric plaid.
    pub fn halved(&self) -> Contrast {
        Contrast(self.0 / 2.0)
    }
}

impl TryFrom<f32> for Contrast {
    type Error = LnlnError;

    fn try_from(value: f32) -> LnlnResult<Self> {
        Contrast::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contrast_accepts_valid_range() {
        assert_eq!(Contrast::new(0.0).unwrap().get(), 0.0);
        assert_eq!(Contrast::new(1.0).unwrap().get(), 1.0);
        assert_eq!(Contrast::new(0.48).unwrap().get(), 0.48);
    }

    #[test]
    fn test_contrast_rejects_out_of_range() {
        assert!(Contrast::new(-0.1).is_err());
        assert!(Contrast::new(1.5).is_err());
        assert!(Contrast::new(f32::NAN).is_err());
    }

    #[test]
    fn test_contrast_halved() {
        let c = Contrast::new(0.96).unwrap();
        assert!((c.halved().get() - 0.48).abs() < 1e-7);
    }
}
