// semtol-laws/src/metaphysical/mod.rs
//! The metaphysical law (semantic tolerance).
//!
//! Predicts the critical noise threshold from the geometric margin:
//! `Sigma_c = max(2 * (M - 1.5), 0)`. Below the phase transition a system
//! has no noise resistance; above it, resistance grows linearly.

extern crate alloc;
use alloc::vec::Vec;

use crate::{CriticalNoiseThreshold, PHASE_TRANSITION_THRESHOLD, SAFETY_SLOPE};

/// The margin at which a system turns from inert to structured.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseTransition {
    pub threshold: f64,
}

impl Default for PhaseTransition {
    fn default() -> Self {
        Self {
            threshold: PHASE_TRANSITION_THRESHOLD,
        }
    }
}

impl PhaseTransition {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Critical noise threshold for `margin` against this transition point.
    pub fn critical_threshold(&self, margin: f64) -> CriticalNoiseThreshold {
        clip_at_zero(SAFETY_SLOPE * (margin - self.threshold))
    }
}

/// Computes `max(2 * (margin - 1.5), 0)`.
pub fn metaphysical_safety_law(margin: f64) -> CriticalNoiseThreshold {
    PhaseTransition::default().critical_threshold(margin)
}

/// Applies [`metaphysical_safety_law`] to every margin in `margins`.
pub fn metaphysical_safety_law_batch(margins: &[f64]) -> Vec<CriticalNoiseThreshold> {
    margins.iter().map(|&m| metaphysical_safety_law(m)).collect()
}

// f64::max would swallow NaN; an elementwise maximum propagates it.
fn clip_at_zero(value: f64) -> f64 {
    if value.is_nan() || value > 0.0 {
        value
    } else {
        0.0
    }
}
