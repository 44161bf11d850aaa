use core::hash::{Hash, Hasher};

use super::Equivalence;

/// The element type's own notion of equality.
///
/// This is the rule every equality-sensitive operation falls back to
/// when the caller does not supply one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Intrinsic;

impl<T: Eq + Hash> Equivalence<T> for Intrinsic {
    fn eq(&self, a: &T, b: &T) -> bool {
        a == b
    }

    fn hash(&self, value: &T, mut state: &mut dyn Hasher) {
        value.hash(&mut state)
    }
}
