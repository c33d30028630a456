// semtol-core/src/headless.rs
//! Convenience wrappers for one-shot evaluation without managing
//! configuration or evaluator instances by hand.

use anyhow::Result;

use crate::config::{merge_config, LawConfig};
use crate::evaluator::{DatasetAssessment, DatasetMeasurement, LawEvaluator};

/// Evaluates `measurements` with the embedded default constants.
pub fn evaluate_with_defaults(measurements: &[DatasetMeasurement]) -> Result<Vec<DatasetAssessment>> {
    evaluate_with_overrides(measurements, None)
}

/// Evaluates `measurements` with the default constants merged with
/// optional user overrides.
///
/// # Arguments
///
/// * `measurements` - Precomputed noise ratio and margin per dataset.
/// * `user_config` - Values that replace the defaults field by field.
pub fn evaluate_with_overrides(
    measurements: &[DatasetMeasurement],
    user_config: Option<LawConfig>,
) -> Result<Vec<DatasetAssessment>> {
    let config = merge_config(LawConfig::load_default()?, user_config);
    let evaluator = LawEvaluator::from_config(&config)?;
    Ok(evaluator.evaluate_all(measurements))
}
