//! Set reconciliation over string keys.

use std::collections::BTreeSet;

/// Compute a set-delta between two key collections.
///
/// Returns `(only_in_b, only_in_a)`, both sorted ascending and deduplicated.
/// Empty inputs give empty vectors.
pub fn set_delta<A, B>(a: A, b: B) -> (Vec<String>, Vec<String>)
where
    A: IntoIterator,
    A::Item: AsRef<str>,
    B: IntoIterator,
    B::Item: AsRef<str>,
{
    let set_a: BTreeSet<String> = a.into_iter().map(|s| s.as_ref().to_string()).collect();
    let set_b: BTreeSet<String> = b.into_iter().map(|s| s.as_ref().to_string()).collect();
    let only_in_b = set_b.difference(&set_a).cloned().collect();
    let only_in_a = set_a.difference(&set_b).cloned().collect();
    (only_in_b, only_in_a)
}

/// Sorted, deduplicated union of two key collections.
pub fn sorted_union<A, B>(a: A, b: B) -> Vec<String>
where
    A: IntoIterator,
    A::Item: AsRef<str>,
    B: IntoIterator,
    B::Item: AsRef<str>,
{
    let union: BTreeSet<String> = a
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .chain(b.into_iter().map(|s| s.as_ref().to_string()))
        .collect();
    union.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_set_delta_only_in_a() {
        let (only_in_b, only_in_a) = set_delta(["tc1", "tc2"], ["tc1"]);
        assert!(only_in_b.is_empty());
        assert_eq!(only_in_a, vec!["tc2"]);
    }

    #[test]
    fn test_set_delta_sorts_and_dedups() {
        let (only_in_b, only_in_a) = set_delta(["z", "a", "a"], ["m", "c", "m"]);
        assert_eq!(only_in_b, vec!["c", "m"]);
        assert_eq!(only_in_a, vec!["a", "z"]);
    }

    #[test]
    fn test_set_delta_empty_inputs() {
        let empty: [&str; 0] = [];
        let (only_in_b, only_in_a) = set_delta(empty, empty);
        assert!(only_in_b.is_empty());
        assert!(only_in_a.is_empty());
    }

    #[test]
    fn test_sorted_union() {
        let union = sorted_union(vec!["b".to_string(), "a".to_string()], ["c", "a"]);
        assert_eq!(union, vec!["a", "b", "c"]);
    }

    proptest! {
        #[test]
        fn prop_set_delta_symmetric(
            a in proptest::collection::vec("[a-e]{1,2}", 0..12),
            b in proptest::collection::vec("[a-e]{1,2}", 0..12),
        ) {
            let (ab_only_b, ab_only_a) = set_delta(&a, &b);
            let (ba_only_a, ba_only_b) = set_delta(&b, &a);
            prop_assert_eq!(ab_only_b, ba_only_b);
            prop_assert_eq!(ab_only_a, ba_only_a);
        }

        #[test]
        fn prop_union_covers_every_key_once(
            a in proptest::collection::vec("[a-e]{1,2}", 0..12),
            b in proptest::collection::vec("[a-e]{1,2}", 0..12),
        ) {
            let union = sorted_union(&a, &b);
            for key in a.iter().chain(b.iter()) {
                prop_assert_eq!(union.iter().filter(|k| *k == key).count(), 1);
            }
            let mut sorted = union.clone();
            sorted.sort();
            prop_assert_eq!(&sorted, &union);

            let (only_in_b, only_in_a) = set_delta(&a, &b);
            for key in &union {
                let in_a = a.contains(key);
                let in_b = b.contains(key);
                prop_assert_eq!(only_in_a.contains(key), in_a && !in_b);
                prop_assert_eq!(only_in_b.contains(key), in_b && !in_a);
            }
        }
    }
}
