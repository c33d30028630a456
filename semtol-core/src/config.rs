//! Configuration management for `semtol-core`.
//!
//! The empirical constants of both laws (`eta`, `r0` and the phase transition
//! threshold) are defaults, not invariants. This module handles YAML
//! (de)serialization of overrides, merging user values over the embedded
//! defaults, and validating the result into parameters the laws accept.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

use semtol_laws::{EntropyLawParams, PhaseTransition};

use crate::errors::SemtolError;

/// Overrides for the entropy dominance law.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct EntropyLawConfig {
    /// Efficiency factor (default: 0.38).
    pub eta: Option<f64>,
    /// Scale constant of the saturation term (default: 0.20). Must be nonzero.
    pub r0: Option<f64>,
}

/// Overrides for the semantic tolerance law and the regime classifier.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PhaseTransitionConfig {
    /// Margin separating the inert and structured regimes (default: 1.5).
    pub threshold: Option<f64>,
}

/// Represents the top-level configuration structure.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct LawConfig {
    pub entropy: EntropyLawConfig,
    pub phase_transition: PhaseTransitionConfig,
}

/// Fully validated parameters, ready to hand to the laws.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLaws {
    pub entropy: EntropyLawParams,
    pub phase_transition: PhaseTransition,
}

impl LawConfig {
    /// Parses a YAML document into a configuration without validating it.
    pub fn from_yaml_str(text: &str) -> Result<Self, SemtolError> {
        serde_yml::from_str(text).map_err(|e| SemtolError::ConfigParse(e.to_string()))
    }

    /// Loads law overrides from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading law configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config
            .resolve()
            .with_context(|| format!("Invalid law parameters in {}", path.display()))?;
        Ok(config)
    }

    /// Loads the default constants from the embedded configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default law constants from embedded string...");
        let default_yaml = include_str!("../config/default_laws.yaml");
        let config = Self::from_yaml_str(default_yaml).context("Failed to parse default law constants")?;
        debug!("Default law constants: {:?}", config);
        Ok(config)
    }

    /// Validates the configuration and fills unset values with the built-in defaults.
    pub fn resolve(&self) -> Result<ResolvedLaws, SemtolError> {
        let defaults = ResolvedLaws::default();

        let eta = self.entropy.eta.unwrap_or(defaults.entropy.eta);
        let r0 = self.entropy.r0.unwrap_or(defaults.entropy.r0);
        let threshold = self
            .phase_transition
            .threshold
            .unwrap_or(defaults.phase_transition.threshold);

        require_finite("entropy.eta", eta)?;
        require_finite("entropy.r0", r0)?;
        require_finite("phase_transition.threshold", threshold)?;

        if r0 == 0.0 {
            return Err(SemtolError::InvalidParameter {
                name: "entropy.r0",
                value: r0,
                reason: "the scale constant must be nonzero",
            });
        }
        if eta <= 0.0 || r0 < 0.0 {
            warn!(
                "Non-positive entropy law parameters (eta = {}, r0 = {}); information is no longer monotonic in the noise ratio.",
                eta, r0
            );
        }

        let resolved = ResolvedLaws {
            entropy: EntropyLawParams::new(eta, r0),
            phase_transition: PhaseTransition::new(threshold),
        };
        debug!("Resolved law parameters: {:?}", resolved);
        Ok(resolved)
    }
}

/// Merges user-defined overrides with defaults, field by field.
pub fn merge_config(default_config: LawConfig, user_config: Option<LawConfig>) -> LawConfig {
    let mut merged = default_config;

    if let Some(user_cfg) = user_config {
        if let Some(eta) = user_cfg.entropy.eta {
            debug!("Overriding eta with user value: {}", eta);
            merged.entropy.eta = Some(eta);
        }
        if let Some(r0) = user_cfg.entropy.r0 {
            debug!("Overriding r0 with user value: {}", r0);
            merged.entropy.r0 = Some(r0);
        }
        if let Some(threshold) = user_cfg.phase_transition.threshold {
            debug!("Overriding phase transition threshold with user value: {}", threshold);
            merged.phase_transition.threshold = Some(threshold);
        }
    }

    merged
}

fn require_finite(name: &'static str, value: f64) -> Result<(), SemtolError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SemtolError::InvalidParameter {
            name,
            value,
            reason: "must be a finite number",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_resolves_to_defaults() {
        let config = LawConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, LawConfig::default());
        assert_eq!(config.resolve().unwrap(), ResolvedLaws::default());
    }

    #[test]
    fn test_partial_section() {
        let config = LawConfig::from_yaml_str("entropy:\n  eta: 0.5\n").unwrap();
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.entropy.eta, 0.5);
        assert_eq!(resolved.entropy.r0, semtol_laws::DEFAULT_R0);
        assert_eq!(resolved.phase_transition.threshold, semtol_laws::PHASE_TRANSITION_THRESHOLD);
    }

    #[test]
    fn test_zero_scale_constant_rejected() {
        let config = LawConfig {
            entropy: EntropyLawConfig { eta: None, r0: Some(0.0) },
            ..Default::default()
        };
        let err = config.resolve().unwrap_err();
        assert!(matches!(err, SemtolError::InvalidParameter { name: "entropy.r0", .. }));
    }

    #[test]
    fn test_non_finite_rejected() {
        let config = LawConfig {
            phase_transition: PhaseTransitionConfig { threshold: Some(f64::INFINITY) },
            ..Default::default()
        };
        assert!(config.resolve().is_err());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = LawConfig::from_yaml_str("entropy: [1, 2").unwrap_err();
        assert!(matches!(err, SemtolError::ConfigParse(_)));
    }
}
