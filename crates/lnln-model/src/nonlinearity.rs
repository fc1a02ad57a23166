// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Static nonlinear transfer functions.
//!
//! Two kinds live here: the half-wave rectifier applied per subunit and at
//! the output stage, and the contrast-response family that maps a stimulus
//! contrast level to a drive amplitude. All contrast-response forms are
//! monotone nondecreasing on their valid contrast domain, and all fitted
//! parameters are checked for NaN/Inf at construction so nothing non-finite
//! enters the cascade.

use lnln_structures::{LnlnError, LnlnResult};

/// Half-wave rectification (relu).
///
/// Total over the real line. NaN passes through and is caught by the
/// cascade's per-sample finiteness check.
#[inline]
pub fn relu(x: f32) -> f32 {
    if x < 0.0 {
        0.0
    } else {
        x
    }
}

/// A fitted contrast-response function.
///
/// Forms follow the standard contrast-response families; `Hyperbolic` is
/// the Naka-Rushton ratio `max_rate * c^n / (c^n + c50^n) + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContrastResponse {
    /// `gain * c + offset`
    Linear { gain: f32, offset: f32 },
    /// `gain * log10(c) + offset`; valid for c > 0 only
    Logarithmic { gain: f32, offset: f32 },
    /// `gain * c^exponent + offset`
    Power {
        gain: f32,
        offset: f32,
        exponent: f32,
    },
    /// `max_rate * c^exponent / (c^exponent + c50^exponent) + offset`
    Hyperbolic {
        max_rate: f32,
        offset: f32,
        c50: f32,
        exponent: f32,
    },
}

impl ContrastResponse {
    pub fn linear(gain: f32, offset: f32) -> LnlnResult<Self> {
        LnlnError::ensure_finite("gain", gain)?;
        LnlnError::ensure_finite("offset", offset)?;
        Ok(ContrastResponse::Linear { gain, offset })
    }

    pub fn logarithmic(gain: f32, offset: f32) -> LnlnResult<Self> {
        LnlnError::ensure_finite("gain", gain)?;
        LnlnError::ensure_finite("offset", offset)?;
        Ok(ContrastResponse::Logarithmic { gain, offset })
    }

    pub fn power(gain: f32, offset: f32, exponent: f32) -> LnlnResult<Self> {
        LnlnError::ensure_finite("gain", gain)?;
        LnlnError::ensure_finite("offset", offset)?;
        LnlnError::ensure_finite("exponent", exponent)?;
        if exponent <= 0.0 {
            return Err(LnlnError::BadParameter {
                name: "exponent",
                reason: format!("{} is not strictly positive", exponent),
            });
        }
        Ok(ContrastResponse::Power {
            gain,
            offset,
            exponent,
        })
    }

    pub fn hyperbolic(max_rate: f32, offset: f32, c50: f32, exponent: f32) -> LnlnResult<Self> {
        LnlnError::ensure_finite("max_rate", max_rate)?;
        LnlnError::ensure_finite("offset", offset)?;
        LnlnError::ensure_finite("c50", c50)?;
        LnlnError::ensure_finite("exponent", exponent)?;
        if c50 <= 0.0 {
            return Err(LnlnError::BadParameter {
                name: "c50",
                reason: format!("{} is not strictly positive", c50),
            });
        }
        if exponent <= 0.0 {
            return Err(LnlnError::BadParameter {
                name: "exponent",
                reason: format!("{} is not strictly positive", exponent),
            });
        }
        Ok(ContrastResponse::Hyperbolic {
            max_rate,
            offset,
            c50,
            exponent,
        })
    }

    /// The reference subunit parameterization (Rmax = 11.3, C50 = 0.5,
    /// linear order, zero offset).
    pub fn reference() -> ContrastResponse {
        ContrastResponse::Hyperbolic {
            max_rate: 11.3,
            offset: 0.0,
            c50: 0.5,
            exponent: 1.0,
        }
    }

    /// Evaluate the response amplitude at a contrast level `c >= 0`.
    pub fn evaluate(&self, contrast: f32) -> f32 {
        match *self {
            ContrastResponse::Linear { gain, offset } => gain * contrast + offset,
            ContrastResponse::Logarithmic { gain, offset } => gain * contrast.log10() + offset,
            ContrastResponse::Power {
                gain,
                offset,
                exponent,
            } => gain * contrast.powf(exponent) + offset,
            ContrastResponse::Hyperbolic {
                max_rate,
                offset,
                c50,
                exponent,
            } => {
                let cn = contrast.powf(exponent);
                max_rate * cn / (cn + c50.powf(exponent)) + offset
            }
        }
    }
}
