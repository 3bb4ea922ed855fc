//! # Sort Engine
//!
//! Comparison sorts over slices, plus expiry ordering for items.
//!
//! Every function here is non-mutating: the input slice is left untouched
//! and a freshly allocated `Vec` is returned.
//!
//! ## Algorithms
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  merge_sort                         │  quick_sort                       │
//! │  ──────────                         │  ──────────                       │
//! │  split at len / 2                   │  pivot = first element            │
//! │  sort halves recursively            │  lower = rest where x <= pivot    │
//! │  merge, left wins ties (stable)     │  upper = rest where x >  pivot    │
//! │  O(n log n) always                  │  lower ++ [pivot] ++ upper        │
//! │                                     │  O(n²) on sorted input            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quick sort partitions in a single left-to-right pass, so each partition
//! keeps scan order. Elements equal to the pivot land in `lower`, ahead of
//! the pivot itself, so equal keys get reversed at every recursion level
//! and the output is not stable.

use std::cmp::Ordering;

use tracing::debug;

use crate::expiry::expiry_sort_key;
use crate::types::Item;

// =============================================================================
// Merge Sort
// =============================================================================

/// Stable merge sort in ascending order.
///
/// ## Example
/// ```rust
/// use supply_core::sort::merge_sort;
///
/// assert_eq!(merge_sort(&[5, 10, 7, 20, 12]), vec![5, 7, 10, 12, 20]);
/// ```
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    merge_sort_by(items, T::cmp)
}

/// Stable merge sort with a custom comparator.
pub fn merge_sort_by<T, F>(items: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_inner(items, &mut compare)
}

/// Stable merge sort on a derived key.
pub fn merge_sort_by_key<T, K, F>(items: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    merge_sort_by(items, |a, b| key(a).cmp(&key(b)))
}

fn merge_sort_inner<T, F>(items: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = merge_sort_inner(&items[..mid], compare);
    let right = merge_sort_inner(&items[mid..], compare);
    merge(left, right, compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // Left wins ties
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
            _ => break,
        };
        out.extend(if take_left { left.next() } else { right.next() });
    }

    out.extend(left);
    out.extend(right);
    out
}

// =============================================================================
// Quick Sort
// =============================================================================

/// Quick sort with a first-element pivot, ascending order.
///
/// ## Example
/// ```rust
/// use supply_core::sort::quick_sort;
///
/// assert_eq!(quick_sort(&[5, 10, 7, 20, 12]), vec![5, 7, 10, 12, 20]);
/// ```
pub fn quick_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    quick_sort_by(items, T::cmp)
}

/// Quick sort with a custom comparator.
pub fn quick_sort_by<T, F>(items: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_inner(items, &mut compare)
}

/// Quick sort on a derived key.
pub fn quick_sort_by_key<T, K, F>(items: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    quick_sort_by(items, |a, b| key(a).cmp(&key(b)))
}

fn quick_sort_inner<T, F>(items: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let (pivot, rest) = (&items[0], &items[1..]);
    let (lower, upper): (Vec<T>, Vec<T>) = rest
        .iter()
        .cloned()
        .partition(|x| compare(x, pivot) != Ordering::Greater);

    let mut out = quick_sort_inner(&lower, compare);
    out.push(pivot.clone());
    out.extend(quick_sort_inner(&upper, compare));
    out
}

// =============================================================================
// Expiry Ordering
// =============================================================================

/// Orders items by expiry date, soonest first.
///
/// Items whose expiry does not parse sort after every dated item. The sort
/// is stable, so ties keep ledger order.
pub fn order_by_expiry(items: &[Item]) -> Vec<Item> {
    let sorted = merge_sort_by_key(items, |item| expiry_sort_key(item.expiry()));

    debug!(
        items = sorted.len(),
        undated = sorted.iter().filter(|i| i.expiry_date().is_none()).count(),
        "Ordered items by expiry"
    );
    sorted
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_items;

    #[test]
    fn test_sorts_sample_quantities() {
        let quantities = [5, 10, 7, 20, 12];
        assert_eq!(merge_sort(&quantities), vec![5, 7, 10, 12, 20]);
        assert_eq!(quick_sort(&quantities), vec![5, 7, 10, 12, 20]);
    }

    #[test]
    fn test_trivial_inputs() {
        let empty: [u32; 0] = [];
        assert!(merge_sort(&empty).is_empty());
        assert!(quick_sort(&empty).is_empty());
        assert_eq!(merge_sort(&[42]), vec![42]);
        assert_eq!(quick_sort(&[42]), vec![42]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = vec![3, 1, 2];
        let _ = merge_sort(&input);
        let _ = quick_sort(&input);
        assert_eq!(input, vec![3, 1, 2]);
    }

    #[test]
    fn test_duplicates_and_descending() {
        let input = [9, 3, 3, 8, 1, 9, 0];
        assert_eq!(merge_sort(&input), vec![0, 1, 3, 3, 8, 9, 9]);
        assert_eq!(quick_sort(&input), vec![0, 1, 3, 3, 8, 9, 9]);

        let descending: Vec<u32> = (0..200).rev().collect();
        let ascending: Vec<u32> = (0..200).collect();
        assert_eq!(quick_sort(&descending), ascending);
        assert_eq!(merge_sort(&descending), ascending);
    }

    #[test]
    fn test_merge_sort_is_stable() {
        let pairs = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        let sorted = merge_sort_by_key(&pairs, |p| p.0);
        assert_eq!(sorted, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_quick_sort_places_pivot_after_equals() {
        // Each pivot lands after the equals partitioned below it: (1, 'a')
        // after (1, 'b'), then (0, 'c') after (0, 'd') one level down
        let pairs = [(1, 'a'), (1, 'b'), (0, 'c'), (0, 'd')];
        let sorted = quick_sort_by_key(&pairs, |p| p.0);
        assert_eq!(sorted, vec![(0, 'd'), (0, 'c'), (1, 'b'), (1, 'a')]);
    }

    #[test]
    fn test_descending_comparator() {
        let sorted = merge_sort_by(&[1, 3, 2], |a, b| b.cmp(a));
        assert_eq!(sorted, vec![3, 2, 1]);
        let sorted = quick_sort_by(&[1, 3, 2], |a, b| b.cmp(a));
        assert_eq!(sorted, vec![3, 2, 1]);
    }

    #[test]
    fn test_order_by_expiry_sample() {
        let names: Vec<String> = order_by_expiry(&sample_items())
            .iter()
            .map(|i| i.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["Luvas", "Reagente A", "Reagente B", "Álcool 70", "Seringa"]
        );
    }

    #[test]
    fn test_order_by_expiry_undated_last() {
        let items = vec![
            Item::new("Sem data", 1, "sem validade"),
            Item::new("Gaze", 3, "Validade: 2030-01-01"),
            Item::new("Torta", 2, "2026-02-30"),
            Item::new("Luvas", 20, "2025-11-20"),
        ];
        let sorted = order_by_expiry(&items);
        let names: Vec<&str> = sorted.iter().map(|i| i.name()).collect();
        // Undated items keep their ledger order among themselves
        assert_eq!(names, vec!["Luvas", "Gaze", "Sem data", "Torta"]);
    }

    #[test]
    fn test_order_by_expiry_latest_date_before_undated() {
        use chrono::{Datelike, NaiveDate};

        let latest = format!("{}-12-31", NaiveDate::MAX.year());
        let items = vec![
            Item::new("Sem data", 1, "sem validade"),
            Item::new("Eterno", 2, latest.as_str()),
        ];
        let sorted = order_by_expiry(&items);
        let names: Vec<&str> = sorted.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["Eterno", "Sem data"]);
    }

    #[test]
    fn test_order_by_expiry_is_idempotent() {
        let once = order_by_expiry(&sample_items());
        let twice = order_by_expiry(&once);
        assert_eq!(once, twice);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn expiry_strategy() -> impl Strategy<Value = String> {
            prop_oneof![
                (2020i32..2035, 1u32..13, 1u32..29)
                    .prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}")),
                Just("garbage".to_string()),
                Just("2026-02-31".to_string()),
            ]
        }

        proptest! {
            #[test]
            fn merge_and_quick_agree(input in proptest::collection::vec(any::<i32>(), 0..64)) {
                let merged = merge_sort(&input);
                let quick = quick_sort(&input);
                prop_assert_eq!(&merged, &quick);

                let mut expected = input.clone();
                expected.sort();
                // Sorted output with the same multiset
                prop_assert_eq!(merged, expected);
            }

            #[test]
            fn expiry_ordering_puts_undated_last(
                expiries in proptest::collection::vec(expiry_strategy(), 0..24)
            ) {
                let items: Vec<Item> = expiries
                    .iter()
                    .enumerate()
                    .map(|(i, e)| Item::new(format!("item {i}"), i as u32, e.clone()))
                    .collect();

                let sorted = order_by_expiry(&items);
                prop_assert_eq!(sorted.len(), items.len());

                let first_undated = sorted.iter().position(|i| i.expiry_date().is_none());
                if let Some(first) = first_undated {
                    prop_assert!(sorted[first..].iter().all(|i| i.expiry_date().is_none()));
                }
                prop_assert!(sorted
                    .windows(2)
                    .all(|w| expiry_sort_key(w[0].expiry()) <= expiry_sort_key(w[1].expiry())));
                prop_assert_eq!(order_by_expiry(&sorted), sorted);
            }
        }
    }
}
