use core::hash::Hash;

use crate::rule::{intrinsic::Intrinsic, Equivalence};

/// Lock-step equality: same length, pairwise-equal elements in order.
pub fn sequence_equal<I, J>(first: I, second: J) -> bool
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    I::Item: Eq + Hash,
{
    sequence_equal_by(first, second, &Intrinsic)
}

/// [`sequence_equal`] under a caller-supplied rule. Stops at the first
/// mismatch or the first uneven exhaustion; neither source is visited
/// past the decisive position.
pub fn sequence_equal_by<I, J, R>(first: I, second: J, rule: &R) -> bool
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    R: Equivalence<I::Item>,
{
    let mut first = first.into_iter();
    let mut second = second.into_iter();

    loop {
        match (first.next(), second.next()) {
            (Some(a), Some(b)) => {
                if !rule.eq(&a, &b) {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}
