// semtol-laws/src/physical/mod.rs
//! The physical law (entropy dominance).
//!
//! Describes information collapse in systems lacking internal structure:
//!
//! `I(R) = eta * R * (1 - exp(-R / R0))`
use libm::exp;

extern crate alloc;
use alloc::vec::Vec;

use crate::{Information, DEFAULT_ETA, DEFAULT_R0};

/// Parameters of the entropy dominance law.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntropyLawParams {
    /// Efficiency factor (empirical ~0.38 for unstructured data).
    pub eta: f64,
    /// Scale constant (empirical ~0.20). Must be nonzero.
    pub r0: f64,
}

impl Default for EntropyLawParams {
    fn default() -> Self {
        Self {
            eta: DEFAULT_ETA,
            r0: DEFAULT_R0,
        }
    }
}

impl EntropyLawParams {
    pub fn new(eta: f64, r0: f64) -> Self {
        Self { eta, r0 }
    }

    /// Remaining information at noise ratio `r`.
    pub fn information(&self, r: f64) -> Information {
        physical_entropy_law(r, self.eta, self.r0)
    }

    /// The saturation factor `1 - exp(-r / r0)`, in [0, 1) for `r >= 0`.
    pub fn saturation_ratio(&self, r: f64) -> f64 {
        1.0 - exp(-r / self.r0)
    }
}

/// Computes `eta * r * (1 - exp(-r / r0))`.
///
/// `r0 == 0` is not guarded: the result follows IEEE-754 (`NaN` at `r == 0`,
/// otherwise a signed infinity times zero or a finite value). Negative `r`
/// goes through the same formula.
pub fn physical_entropy_law(r: f64, eta: f64, r0: f64) -> Information {
    eta * r * (1.0 - exp(-r / r0))
}

/// Applies [`physical_entropy_law`] to every noise ratio in `rs`.
pub fn physical_entropy_law_batch(rs: &[f64], eta: f64, r0: f64) -> Vec<Information> {
    rs.iter().map(|&r| physical_entropy_law(r, eta, r0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn default_law(r: f64) -> f64 {
        physical_entropy_law(r, DEFAULT_ETA, DEFAULT_R0)
    }

    #[test]
    fn test_zero_noise_is_exactly_zero() {
        assert_eq!(default_law(0.0), 0.0);
        assert_eq!(EntropyLawParams::default().information(0.0), 0.0);
    }

    #[test]
    fn test_reference_point() {
        let expected = 0.38 * 0.5 * (1.0 - exp(-2.5));
        let got = default_law(0.5);
        assert!((got - expected).abs() < EPSILON);
        // 0.19 * (1 - 0.0820850) = 0.1744038
        assert!((got - 0.1744038).abs() < 1e-6, "got {}", got);
    }

    #[test]
    fn test_bounded_on_noise_ratio_domain() {
        for i in 0..=1000 {
            let r = i as f64 / 1000.0;
            let info = default_law(r);
            assert!(info >= 0.0, "I({}) = {} is negative", r, info);
            assert!(info <= DEFAULT_ETA, "I({}) = {} exceeds eta", r, info);
        }
    }

    #[test]
    fn test_monotonic_non_decreasing() {
        let mut previous = default_law(0.0);
        for i in 1..=5000 {
            let r = i as f64 / 500.0;
            let info = default_law(r);
            assert!(info >= previous, "I({}) = {} < {}", r, info, previous);
            previous = info;
        }
    }

    #[test]
    fn test_custom_parameters_override_defaults() {
        let params = EntropyLawParams::new(1.0, 1.0);
        let expected = 2.0 * (1.0 - exp(-2.0));
        assert!((params.information(2.0) - expected).abs() < EPSILON);
        assert!((physical_entropy_law(2.0, 1.0, 1.0) - expected).abs() < EPSILON);
    }

    #[test]
    fn test_negative_ratio_follows_formula() {
        let r = -0.1;
        let expected = DEFAULT_ETA * r * (1.0 - exp(0.5));
        assert!((default_law(r) - expected).abs() < EPSILON);
        assert!(default_law(r) > 0.0);
    }

    #[test]
    fn test_zero_scale_constant_is_not_guarded() {
        assert!(physical_entropy_law(0.0, DEFAULT_ETA, 0.0).is_nan());
        assert!(physical_entropy_law(0.5, DEFAULT_ETA, 0.0).is_finite());
        assert!(physical_entropy_law(-0.5, DEFAULT_ETA, 0.0).is_infinite());
    }

    #[test]
    fn test_saturation_ratio() {
        let params = EntropyLawParams::default();
        assert_eq!(params.saturation_ratio(0.0), 0.0);
        let s = params.saturation_ratio(0.5);
        assert!((params.information(0.5) - params.eta * 0.5 * s).abs() < EPSILON);
        assert!(params.saturation_ratio(100.0) <= 1.0);
    }

    #[test]
    fn test_batch_matches_scalar() {
        let rs = [0.0, 0.05, 0.2, 0.5, 1.0, 3.0];
        let batch = physical_entropy_law_batch(&rs, DEFAULT_ETA, DEFAULT_R0);
        assert_eq!(batch.len(), rs.len());
        for (r, i) in rs.iter().zip(batch.iter()) {
            assert_eq!(*i, default_law(*r));
        }
    }
}
