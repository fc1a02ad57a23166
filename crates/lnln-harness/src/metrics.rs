// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Interaction metrics.
//!
//! Pure functions over response scalars and cycle samples. These are the
//! *only* metric implementations in the workspace: both model variants are
//! scored by exactly these functions, which is what makes the comparison
//! valid.

use std::f32::consts::TAU;

/// Masking index:
///
/// ```text
/// MI = (plaid - (test + mask)) / (plaid + (test + mask))
/// ```
///
/// Negative values indicate cross-orientation suppression (the plaid
/// response falls short of the summed component responses). Undefined
/// (NaN) when all three responses are zero.
#[inline]
pub fn masking_index(test: f32, mask: f32, plaid: f32) -> f32 {
    let linear_sum = test + mask;
    (plaid - linear_sum) / (plaid + linear_sum)
}

/// Selectivity index:
///
/// ```text
/// SI = (test - mask) / (test + mask)
/// ```
#[inline]
pub fn selectivity_index(test: f32, mask: f32) -> f32 {
    (test - mask) / (test + mask)
}

/// Amplitude of the `order`-th Fourier component of a cycle response
/// (order 1 is the F1 modulation component).
///
/// Matches the discrete-transform convention `2 |X_k| / N`, so a pure
/// sinusoid of amplitude A sampled over one cycle reports A at order 1.
pub fn f1_modulation(samples: &[f32], order: usize) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let n = samples.len() as f32;
    let mut real = 0.0f32;
    let mut imaginary = 0.0f32;
    for (step, sample) in samples.iter().enumerate() {
        let angle = TAU * order as f32 * step as f32 / n;
        real += sample * angle.cos();
        imaginary -= sample * angle.sin();
    }
    2.0 * (real * real + imaginary * imaginary).sqrt() / n
}

/// F1 modulation of `samples` normalized by the same component of a
/// reference response.
///
/// Undefined (NaN or infinite) when the reference carries no modulation at
/// this order, e.g. an unmodulated or empty reference response. Callers
/// pick a reference condition that actually modulates.
pub fn f1_modulation_relative(samples: &[f32], reference: &[f32], order: usize) -> f32 {
    f1_modulation(samples, order) / f1_modulation(reference, order)
}
