// semtol-laws/src/elementwise/mod.rs
//! Explicit elementwise evaluation of scalar laws over slices.

extern crate alloc;
use alloc::vec::Vec;

use crate::metaphysical::PhaseTransition;
use crate::physical::EntropyLawParams;

/// A law mapping one real input to one real output.
pub trait ScalarLaw {
    fn apply(&self, x: f64) -> f64;
}

/// Batch evaluation for any [`ScalarLaw`]. Each element is evaluated
/// independently, so the result equals applying the law one value at a time.
pub trait ElementwiseLaw: ScalarLaw {
    fn apply_all(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.apply(x)).collect()
    }

    fn apply_in_place(&self, xs: &mut [f64]) {
        for x in xs.iter_mut() {
            *x = self.apply(*x);
        }
    }
}

impl<L: ScalarLaw + ?Sized> ElementwiseLaw for L {}

impl ScalarLaw for EntropyLawParams {
    fn apply(&self, r: f64) -> f64 {
        self.information(r)
    }
}

impl ScalarLaw for PhaseTransition {
    fn apply(&self, margin: f64) -> f64 {
        self.critical_threshold(margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{metaphysical_safety_law_batch, physical_entropy_law_batch, DEFAULT_ETA, DEFAULT_R0};
    use alloc::vec;

    #[test]
    fn test_entropy_apply_all_matches_batch() {
        let rs = vec![0.0, 0.1, 0.25, 0.5, 0.75, 1.0];
        let law = EntropyLawParams::default();
        assert_eq!(law.apply_all(&rs), physical_entropy_law_batch(&rs, DEFAULT_ETA, DEFAULT_R0));
    }

    #[test]
    fn test_safety_apply_all_matches_batch() {
        let ms = vec![0.5, 1.5, 1.75, 2.0, 4.0];
        let law = PhaseTransition::default();
        assert_eq!(law.apply_all(&ms), metaphysical_safety_law_batch(&ms));
    }

    #[test]
    fn test_apply_in_place() {
        let mut ms = [1.0, 2.0, 3.0];
        PhaseTransition::default().apply_in_place(&mut ms);
        assert_eq!(ms, [0.0, 1.0, 3.0]);
    }

    #[test]
    fn test_empty_slice() {
        assert!(EntropyLawParams::default().apply_all(&[]).is_empty());
    }

    #[test]
    fn test_dyn_law() {
        let laws: [&dyn ScalarLaw; 2] = [&EntropyLawParams::default(), &PhaseTransition::default()];
        assert_eq!(laws[0].apply(0.0), 0.0);
        assert_eq!(laws[1].apply(2.0), 1.0);
        assert_eq!(laws[1].apply_all(&[3.0]), vec![3.0]);
    }
}
