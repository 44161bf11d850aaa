use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::Hasher;

use crate::rule::Equivalence;

/// Membership working set for the set operators.
///
/// Elements are bucketed by the rule's hash key; within a bucket,
/// candidates are compared pairwise with the rule. One `SeenSet` lives
/// for the duration of a single operator call and is then dropped.
#[derive(Debug)]
pub(crate) struct SeenSet<'r, T, R> {
    rule: &'r R,
    buckets: HashMap<u64, Vec<T>>,
}

impl<'r, T, R> SeenSet<'r, T, R>
where
    R: Equivalence<T>,
{
    pub(crate) fn new(rule: &'r R) -> Self {
        SeenSet {
            rule,
            buckets: HashMap::new(),
        }
    }

    fn key(&self, value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.rule.hash(value, &mut hasher);
        hasher.finish()
    }

    pub(crate) fn contains(&self, value: &T) -> bool {
        match self.buckets.get(&self.key(value)) {
            Some(bucket) => bucket.iter().any(|seen| self.rule.eq(seen, value)),
            None => false,
        }
    }

    /// Adds `value` unless an equal element is already present.
    /// Returns whether it was new.
    pub(crate) fn insert(&mut self, value: T) -> bool {
        let key = self.key(&value);
        let bucket = self.buckets.entry(key).or_default();

        if bucket.iter().any(|seen| self.rule.eq(seen, &value)) {
            return false;
        }

        bucket.push(value);
        true
    }

    /// Removes the element equal to `value`, reporting whether it was
    /// there to remove.
    pub(crate) fn remove(&mut self, value: &T) -> bool {
        let key = self.key(value);
        let bucket = if let Some(bucket) = self.buckets.get_mut(&key) {
            bucket
        } else {
            return false;
        };

        if let Some(pos) = bucket.iter().position(|seen| self.rule.eq(seen, value)) {
            bucket.swap_remove(pos);
            if bucket.is_empty() {
                self.buckets.remove(&key);
            }
            true
        } else {
            false
        }
    }
}
