// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Cycle-resolved firing-rate predictions.

/// Predicted firing rate over one full stimulus cycle, sampled at uniform
/// phase steps. Ephemeral: recomputed per stimulus condition.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleResponse {
    samples: Vec<f32>,
}

impl CycleResponse {
    pub fn new(samples: Vec<f32>) -> CycleResponse {
        CycleResponse { samples }
    }

    /// Rate samples in phase order.
    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Mean firing rate over the cycle (the F0 component).
    pub fn mean_rate(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f32>() / self.samples.len() as f32
    }

    /// Peak firing rate over the cycle.
    pub fn peak_rate(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |max, r| max.max(*r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_peak() {
        let response = CycleResponse::new(vec![0.0, 1.0, 3.0, 0.0]);
        assert!((response.mean_rate() - 1.0).abs() < 1e-6);
        assert_eq!(response.peak_rate(), 3.0);
        assert_eq!(response.len(), 4);
    }

    #[test]
    fn test_empty_response_mean_is_zero() {
        let response = CycleResponse::new(Vec::new());
        assert!(response.is_empty());
        assert_eq!(response.mean_rate(), 0.0);
    }
}
