// semtol-core/src/evaluator.rs
//! Applies resolved law parameters to noise ratios and geometric margins.
//!
//! `LawEvaluator` is the std-side counterpart of the `no_std` laws in
//! `semtol-laws`: it carries the validated parameters, logs batch work, and
//! turns per-dataset measurements into serializable assessments.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use semtol_laws::{CriticalNoiseThreshold, ElementwiseLaw, Information, Regime};

use crate::config::{LawConfig, ResolvedLaws};
use crate::errors::SemtolError;

/// Precomputed statistics of one dataset, supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMeasurement {
    pub name: String,
    /// Noise ratio `sigma / sigma_max`.
    pub noise_ratio: f64,
    /// Geometric margin (class separation or max-ratio-to-distance).
    pub margin: f64,
}

impl DatasetMeasurement {
    pub fn new(name: impl Into<String>, noise_ratio: f64, margin: f64) -> Self {
        Self {
            name: name.into(),
            noise_ratio,
            margin,
        }
    }
}

/// Both laws and the regime label evaluated for one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetAssessment {
    pub name: String,
    pub noise_ratio: f64,
    pub margin: f64,
    pub information: Information,
    pub critical_threshold: CriticalNoiseThreshold,
    pub regime: Regime,
}

impl DatasetAssessment {
    /// Serializes the assessment as a single JSON object.
    pub fn to_json(&self) -> Result<String, SemtolError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Evaluates the laws with one fixed set of parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LawEvaluator {
    laws: ResolvedLaws,
}

impl LawEvaluator {
    pub fn new(laws: ResolvedLaws) -> Self {
        Self { laws }
    }

    /// Validates `config` and builds an evaluator from it.
    pub fn from_config(config: &LawConfig) -> Result<Self, SemtolError> {
        Ok(Self::new(config.resolve()?))
    }

    pub fn information(&self, noise_ratio: f64) -> Information {
        if noise_ratio < 0.0 {
            warn!("Noise ratio {} is negative; the entropy law is only meaningful for R >= 0.", noise_ratio);
        }
        self.laws.entropy.information(noise_ratio)
    }

    pub fn information_batch(&self, noise_ratios: &[f64]) -> Vec<Information> {
        debug!("Evaluating entropy law over {} noise ratios", noise_ratios.len());
        let negatives = noise_ratios.iter().filter(|r| **r < 0.0).count();
        if negatives > 0 {
            warn!("{} noise ratios are negative; the entropy law is only meaningful for R >= 0.", negatives);
        }
        self.laws.entropy.apply_all(noise_ratios)
    }

    pub fn critical_threshold(&self, margin: f64) -> CriticalNoiseThreshold {
        self.laws.phase_transition.critical_threshold(margin)
    }

    pub fn critical_threshold_batch(&self, margins: &[f64]) -> Vec<CriticalNoiseThreshold> {
        debug!("Evaluating safety law over {} margins", margins.len());
        self.laws.phase_transition.apply_all(margins)
    }

    pub fn regime(&self, margin: f64) -> Regime {
        self.laws.phase_transition.classify(margin)
    }

    /// Applies all three laws to a single dataset.
    pub fn evaluate(&self, measurement: &DatasetMeasurement) -> DatasetAssessment {
        let assessment = DatasetAssessment {
            name: measurement.name.clone(),
            noise_ratio: measurement.noise_ratio,
            margin: measurement.margin,
            information: self.information(measurement.noise_ratio),
            critical_threshold: self.critical_threshold(measurement.margin),
            regime: self.regime(measurement.margin),
        };
        debug!(
            "Dataset '{}': I = {:.4}, Sigma_c = {:.4}, regime = {}",
            assessment.name, assessment.information, assessment.critical_threshold, assessment.regime
        );
        assessment
    }

    pub fn evaluate_all(&self, measurements: &[DatasetMeasurement]) -> Vec<DatasetAssessment> {
        debug!("Evaluating {} datasets", measurements.len());
        measurements.iter().map(|m| self.evaluate(m)).collect()
    }
}
