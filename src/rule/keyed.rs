use core::hash::{Hash, Hasher};

use super::Equivalence;

/// Rule that compares elements by a derived key.
///
/// The key type's own `Eq` and `Hash` decide equality, which keeps
/// `eq` and `hash` consistent without the caller writing either.
#[derive(Clone, Copy)]
pub struct ByKey<F>(F);

impl<F> ByKey<F> {
    pub fn new(key: F) -> Self {
        ByKey(key)
    }
}

impl<T, K, F> Equivalence<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Eq + Hash,
{
    fn eq(&self, a: &T, b: &T) -> bool {
        (self.0)(a) == (self.0)(b)
    }

    fn hash(&self, value: &T, mut state: &mut dyn Hasher) {
        (self.0)(value).hash(&mut state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projected_key_decides() {
        let rule = ByKey::new(|n: &i32| n % 3);
        assert!(rule.eq(&3, &9));
        assert!(!rule.eq(&1, &2));
    }
}
