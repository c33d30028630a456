// semtol-core/src/lib.rs
//! # Semantic Tolerance Core Library
//!
//! `semtol-core` wraps the pure laws from `semtol-laws` with the pieces an
//! evaluation over precomputed datasets needs: configurable constants,
//! validation, logging, and serializable per-dataset assessments.
//!
//! ## Modules
//!
//! * `config`: YAML overrides for `eta`, `r0` and the phase transition threshold.
//! * `evaluator`: `LawEvaluator`, applying resolved parameters to scalars, batches and datasets.
//! * `headless`: One-shot helpers over the embedded defaults.
//! * `errors`: The `SemtolError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use semtol_core::{evaluate_with_defaults, DatasetMeasurement};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let measurements = vec![
//!         DatasetMeasurement::new("inert", 0.5, 1.2),
//!         DatasetMeasurement::new("structured", 0.5, 2.0),
//!     ];
//!     for assessment in evaluate_with_defaults(&measurements)? {
//!         println!("{}: {} (Sigma_c = {})", assessment.name, assessment.regime, assessment.critical_threshold);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The laws never fail; `R0 = 0` yields IEEE-754 `NaN`/`inf`. Loading and
//! validating configuration returns `anyhow::Result` or `SemtolError`.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod errors;
pub mod evaluator;
pub mod headless;

/// Re-exports the configuration types and merge helper.
pub use config::{merge_config, EntropyLawConfig, LawConfig, PhaseTransitionConfig, ResolvedLaws};

/// Re-exports the custom error type for clear error reporting.
pub use errors::SemtolError;

/// Re-exports the evaluator and its report types.
pub use evaluator::{DatasetAssessment, DatasetMeasurement, LawEvaluator};

/// Re-exports types and functions for one-shot use.
pub use headless::{evaluate_with_defaults, evaluate_with_overrides};

// The laws themselves, so callers need only one dependency.
pub use semtol_laws::{
    classify_regime, metaphysical_safety_law, physical_entropy_law, EntropyLawParams, PhaseTransition,
    Regime,
};
