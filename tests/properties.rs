use onepass::{
    count, distinct, distinct_by, except, filter, intersect, sequence_equal, skip_while,
    take_while, union, AsciiCaseless,
};

use proptest::prelude::*;

proptest! {
    #[test]
    fn distinct_keeps_no_equal_pair(items in prop::collection::vec(0..50u8, 0..40)) {
        let out = distinct(items);
        for (i, a) in out.iter().enumerate() {
            for b in &out[i + 1..] {
                prop_assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn distinct_is_a_subsequence(items in prop::collection::vec(0..50u8, 0..40)) {
        let out = distinct(items.clone());

        let mut rest = out.iter().peekable();
        for item in &items {
            if rest.peek() == Some(&item) {
                rest.next();
            }
        }
        prop_assert!(rest.peek().is_none());
    }

    #[test]
    fn distinct_is_idempotent(items in prop::collection::vec(0..50u8, 0..40)) {
        let once = distinct(items);
        prop_assert_eq!(distinct(once.clone()), once);
    }

    #[test]
    fn union_is_distinct_of_concatenation(
        a in prop::collection::vec(0..30u8, 0..25),
        b in prop::collection::vec(0..30u8, 0..25),
    ) {
        let chained: Vec<u8> = a.iter().chain(b.iter()).copied().collect();
        prop_assert_eq!(union(a, b), distinct(chained));
    }

    #[test]
    fn intersect_and_except_partition_distinct(
        a in prop::collection::vec(0..30u8, 0..25),
        b in prop::collection::vec(0..30u8, 0..25),
    ) {
        let overlap = intersect(a.clone(), b.clone());
        let difference = except(a.clone(), b.clone());
        let base = distinct(a);

        prop_assert_eq!(overlap.len() + difference.len(), base.len());
        for element in base {
            let in_overlap = overlap.contains(&element);
            let in_difference = difference.contains(&element);
            prop_assert!(in_overlap != in_difference);
        }
    }

    #[test]
    fn sequence_equal_is_reflexive(items in prop::collection::vec(0..50u8, 0..40)) {
        prop_assert!(sequence_equal(items.clone(), items));
    }

    #[test]
    fn filter_agrees_with_count(
        items in prop::collection::vec(0..50u8, 0..40),
        threshold in 0..50u8,
    ) {
        prop_assert_eq!(
            filter(items.clone(), |n| *n < threshold).len(),
            count(items, |n| *n < threshold)
        );
    }

    #[test]
    fn skip_and_take_rebuild_the_sequence(
        items in prop::collection::vec(0..50u8, 0..40),
        threshold in 0..50u8,
    ) {
        let mut rebuilt = take_while(items.clone(), |n| *n < threshold);
        rebuilt.extend(skip_while(items.clone(), |n| *n < threshold));
        prop_assert_eq!(rebuilt, items);
    }

    #[test]
    fn caseless_distinct_collapses_case(
        words in prop::collection::vec("[a-dA-D]{0,3}", 0..12),
    ) {
        let out = distinct_by(words, &AsciiCaseless);
        for (i, a) in out.iter().enumerate() {
            for b in &out[i + 1..] {
                prop_assert!(!a.eq_ignore_ascii_case(b));
            }
        }
    }
}
