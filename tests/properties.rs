//! Property-based tests for the sorting guarantees, run against every strategy

use std::cmp::Ordering;
use std::collections::HashMap;

use merge_sort::{merge, merge_sort, SortOptions, Strategy};
use proptest::prelude::*;

fn options() -> SortOptions {
    SortOptions { threads: 3, depth: 2 }
}

fn counts(values: &[i64]) -> HashMap<i64, usize> {
    let mut counts = HashMap::new();
    for v in values {
        *counts.entry(*v).or_insert(0) += 1;
    }
    counts
}

fn is_non_decreasing(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Compares on `key` only; `origin` records the input position.
#[derive(Clone, Debug)]
struct Keyed {
    key: i8,
    origin: usize,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}
impl Eq for Keyed {}
impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

proptest! {
    #[test]
    fn sorted_output_is_ordered_and_a_permutation(input in prop::collection::vec(any::<i64>(), 0..300)) {
        for strategy in Strategy::ALL {
            let sorted = strategy.sort(&input, &options()).unwrap();
            prop_assert_eq!(sorted.len(), input.len());
            prop_assert!(is_non_decreasing(&sorted), "{:?}", strategy);
            prop_assert_eq!(counts(&sorted), counts(&input));
        }
    }

    #[test]
    fn sorting_twice_changes_nothing(input in prop::collection::vec(-50i64..50, 0..200)) {
        for strategy in Strategy::ALL {
            let once = strategy.sort(&input, &options()).unwrap();
            let twice = strategy.sort(&once, &options()).unwrap();
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn strategies_match_std_sort(input in prop::collection::vec(any::<i64>(), 0..300)) {
        let mut expected = input.clone();
        expected.sort();
        for strategy in Strategy::ALL {
            prop_assert_eq!(&strategy.sort(&input, &options()).unwrap(), &expected);
        }
    }

    #[test]
    fn equal_keys_keep_input_order(keys in prop::collection::vec(-4i8..4, 0..200)) {
        let input: Vec<Keyed> = keys
            .iter()
            .enumerate()
            .map(|(origin, &key)| Keyed { key, origin })
            .collect();
        // slice::sort is stable
        let mut expected = input.clone();
        expected.sort();
        let expected: Vec<usize> = expected.iter().map(|k| k.origin).collect();
        for strategy in Strategy::ALL {
            let sorted = strategy.sort(&input, &options()).unwrap();
            let origins: Vec<usize> = sorted.iter().map(|k| k.origin).collect();
            prop_assert_eq!(&origins, &expected);
        }
    }

    #[test]
    fn merge_of_sorted_halves_is_sorted(
        mut left in prop::collection::vec(any::<i64>(), 0..100),
        mut right in prop::collection::vec(any::<i64>(), 0..100),
    ) {
        left.sort();
        right.sort();
        let merged = merge(&left, &right);
        prop_assert_eq!(merged.len(), left.len() + right.len());
        prop_assert!(is_non_decreasing(&merged));
        let mut union = left.clone();
        union.extend_from_slice(&right);
        prop_assert_eq!(counts(&merged), counts(&union));
    }

    #[test]
    fn single_element_is_unchanged(x in any::<i64>()) {
        prop_assert_eq!(merge_sort(&[x]), vec![x]);
    }
}
