use core::hash::Hash;

use crate::rule::{intrinsic::Intrinsic, Equivalence};
use crate::seen::SeenSet;

/// First occurrence of every distinct element, in input order.
pub fn distinct<I>(seq: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    distinct_by(seq, &Intrinsic)
}

/// [`distinct`] under a caller-supplied rule.
pub fn distinct_by<I, R>(seq: I, rule: &R) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
    R: Equivalence<I::Item>,
{
    let mut seen = SeenSet::new(rule);
    let mut kept = Vec::new();

    for element in seq {
        if seen.contains(&element) {
            continue;
        }
        kept.push(element.clone());
        seen.insert(element);
    }

    kept
}

/// Elements of `first` equal to no element of `second`, in `first`
/// order, each distinct survivor emitted once.
pub fn except<I, J>(first: I, second: J) -> Vec<I::Item>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    I::Item: Eq + Hash + Clone,
{
    except_by(first, second, &Intrinsic)
}

/// [`except`] under a caller-supplied rule. `second` is drained before
/// `first` is visited.
pub fn except_by<I, J, R>(first: I, second: J, rule: &R) -> Vec<I::Item>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    I::Item: Clone,
    R: Equivalence<I::Item>,
{
    let mut excluded = SeenSet::new(rule);
    for element in second {
        excluded.insert(element);
    }

    let mut kept = Vec::new();
    for element in first {
        if excluded.contains(&element) {
            continue;
        }
        kept.push(element.clone());
        // an emitted element also excludes later repeats of itself
        excluded.insert(element);
    }

    kept
}

/// Elements of `first` equal to some element of `second`, in `first`
/// order, each distinct hit emitted once.
pub fn intersect<I, J>(first: I, second: J) -> Vec<I::Item>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    I::Item: Eq + Hash,
{
    intersect_by(first, second, &Intrinsic)
}

/// [`intersect`] under a caller-supplied rule. `second` is drained
/// before `first` is visited.
pub fn intersect_by<I, J, R>(first: I, second: J, rule: &R) -> Vec<I::Item>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    R: Equivalence<I::Item>,
{
    let mut candidates = SeenSet::new(rule);
    for element in second {
        candidates.insert(element);
    }

    let mut kept = Vec::new();
    for element in first {
        // removing the hit makes later repeats of it miss
        if candidates.remove(&element) {
            kept.push(element);
        }
    }

    kept
}

/// Elements of `first` followed by elements of `second`, duplicates
/// across the pair collapsed to the first overall occurrence.
pub fn union<I, J>(first: I, second: J) -> Vec<I::Item>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    I::Item: Eq + Hash + Clone,
{
    union_by(first, second, &Intrinsic)
}

/// [`union`] under a caller-supplied rule. Equivalent to [`distinct`]
/// over the concatenation of the two inputs.
pub fn union_by<I, J, R>(first: I, second: J, rule: &R) -> Vec<I::Item>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    I::Item: Clone,
    R: Equivalence<I::Item>,
{
    distinct_by(first.into_iter().chain(second), rule)
}
