pub mod ascii;
pub mod intrinsic;
pub mod keyed;

use core::hash::Hasher;

/// Decides whether two elements count as the same element.
///
/// A rule is reflexive and symmetric, and `hash` must be consistent
/// with `eq`: elements that compare equal under the rule must feed
/// identical data to the hasher. The set operators bucket elements by
/// this hash key. A rule that breaks the consistency contract makes
/// their output unspecified; it is never checked at runtime.
pub trait Equivalence<T> {
    fn eq(&self, a: &T, b: &T) -> bool;

    fn hash(&self, value: &T, state: &mut dyn Hasher);
}
