// semtol-laws/src/regime/mod.rs
use core::fmt;

use crate::metaphysical::PhaseTransition;

/// Whether a system is inert or carries internal structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Regime {
    /// No internal structure; the entropy dominance law applies.
    #[cfg_attr(feature = "serde", serde(rename = "Physical (Inert)"))]
    Physical,
    /// Structured; the semantic tolerance law applies.
    #[cfg_attr(feature = "serde", serde(rename = "Metaphysical (Structured)"))]
    Metaphysical,
}

impl Regime {
    /// The human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Regime::Physical => "Physical (Inert)",
            Regime::Metaphysical => "Metaphysical (Structured)",
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Regime::Metaphysical)
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl PhaseTransition {
    /// Structured only when `margin` is strictly above the threshold.
    pub fn classify(&self, margin: f64) -> Regime {
        if margin > self.threshold {
            Regime::Metaphysical
        } else {
            Regime::Physical
        }
    }
}

/// Classifies a single margin against the default transition at 1.5.
pub fn classify_regime(margin: f64) -> Regime {
    PhaseTransition::default().classify(margin)
}
