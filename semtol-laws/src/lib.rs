// semtol-laws/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod physical;
pub mod metaphysical;
pub mod regime;
pub mod elementwise;

pub use elementwise::{ElementwiseLaw, ScalarLaw};
pub use metaphysical::{metaphysical_safety_law, metaphysical_safety_law_batch, PhaseTransition};
pub use physical::{physical_entropy_law, physical_entropy_law_batch, EntropyLawParams};
pub use regime::{classify_regime, Regime};

/// Remaining semantic information, the output of the physical law.
pub type Information = f64;

/// Critical noise level a structured system tolerates before collapse.
pub type CriticalNoiseThreshold = f64;

/// Empirical efficiency factor for unstructured data.
pub const DEFAULT_ETA: f64 = 0.38;

/// Empirical scale constant of the saturation term.
pub const DEFAULT_R0: f64 = 0.20;

/// Margin separating the inert and structured regimes.
pub const PHASE_TRANSITION_THRESHOLD: f64 = 1.5;

/// Growth of the critical noise threshold per unit of margin above the transition.
pub const SAFETY_SLOPE: f64 = 2.0;
