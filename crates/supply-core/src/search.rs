//! # Search Engine
//!
//! Exact-match lookups by normalized name, reporting how much work each
//! lookup took.
//!
//! ## Two Strategies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Sequential                         │  Binary                           │
//! │  ──────────                         │  ──────                           │
//! │  scans ledger order                 │  needs a SortedIndex built from   │
//! │  1 step per item examined           │  the current ledger snapshot      │
//! │  position = index in ledger         │  1 step per midpoint probe        │
//! │  n steps on a miss                  │  position = index in SortedIndex  │
//! │                                     │  <= ceil(log2(n + 1)) steps       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A [`SortedIndex`] borrows the items it was built from, so the ledger
//! cannot grow while an index over it is alive. Build a new one per search.

use std::cmp::Ordering;

use tracing::trace;

use crate::error::{CoreError, CoreResult};
use crate::normalize::normalize;
use crate::types::Item;

// =============================================================================
// Search Outcome
// =============================================================================

/// Result of a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome<'a> {
    /// The matched item, if any.
    pub item: Option<&'a Item>,
    /// Items examined (sequential) or midpoints probed (binary).
    pub steps: usize,
    /// Ledger index (sequential) or sorted-index position (binary).
    pub position: Option<usize>,
}

impl<'a> SearchOutcome<'a> {
    fn hit(item: &'a Item, steps: usize, position: usize) -> Self {
        SearchOutcome {
            item: Some(item),
            steps,
            position: Some(position),
        }
    }

    fn miss(steps: usize) -> Self {
        SearchOutcome {
            item: None,
            steps,
            position: None,
        }
    }

    /// Returns true if an item matched.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.item.is_some()
    }
}

// =============================================================================
// Sequential Search
// =============================================================================

/// Scans `items` in order for the first item whose key equals the key of
/// `target_name`.
///
/// ## Example
/// ```rust
/// use supply_core::search::sequential_search;
/// use supply_core::seed::sample_items;
///
/// let items = sample_items();
/// let outcome = sequential_search(&items, "alcool 70");
/// assert_eq!(outcome.steps, 5);
/// assert_eq!(outcome.position, Some(4));
/// ```
pub fn sequential_search<'a>(items: &'a [Item], target_name: &str) -> SearchOutcome<'a> {
    let target = normalize(target_name);

    let outcome = items
        .iter()
        .position(|item| item.key() == target)
        .map(|idx| SearchOutcome::hit(&items[idx], idx + 1, idx))
        .unwrap_or_else(|| SearchOutcome::miss(items.len()));

    trace!(
        target = %target,
        steps = outcome.steps,
        position = ?outcome.position,
        "Sequential search finished"
    );
    outcome
}

/// Returns every item whose key equals the key of `target_name`, with its
/// ledger index, in ledger order.
///
/// Used when several registered names fold to the same key and the caller
/// has to pick one.
pub fn find_all<'a>(items: &'a [Item], target_name: &str) -> Vec<(usize, &'a Item)> {
    let target = normalize(target_name);
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.key() == target)
        .collect()
}

/// Returns the item at `ledger_index` if it shares the key of `target_name`.
///
/// This is how a caller resolves a collision after [`find_all`]: the user
/// picks a ledger index and the pick is checked against the key.
pub fn select_match<'a>(
    items: &'a [Item],
    target_name: &str,
    ledger_index: usize,
) -> CoreResult<&'a Item> {
    let target = normalize(target_name);

    match items.get(ledger_index) {
        Some(item) if item.key() == target => Ok(item),
        _ if items.iter().any(|item| item.key() == target) => Err(CoreError::NoMatchAtIndex {
            name: target_name.to_string(),
            index: ledger_index,
        }),
        _ => Err(CoreError::ItemNotFound(target_name.to_string())),
    }
}

// =============================================================================
// Sorted Index
// =============================================================================

/// One `(key, item)` pair of a [`SortedIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry<'a> {
    pub key: String,
    pub item: &'a Item,
}

/// Items ordered by normalized key, ready for binary search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedIndex<'a> {
    entries: Vec<IndexEntry<'a>>,
}

impl<'a> SortedIndex<'a> {
    /// Entries in key order.
    #[inline]
    pub fn entries(&self) -> &[IndexEntry<'a>] {
        &self.entries
    }

    /// Keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Position of `item` in the index, by identity rather than key.
    pub fn position_of(&self, item: &Item) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| std::ptr::eq(entry.item, item))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds a [`SortedIndex`] over `items`.
///
/// The sort is stable: items sharing a key keep their ledger order.
pub fn build_sorted_index(items: &[Item]) -> SortedIndex<'_> {
    let mut entries: Vec<IndexEntry<'_>> = items
        .iter()
        .map(|item| IndexEntry {
            key: item.key(),
            item,
        })
        .collect();
    entries.sort_by(|a, b| a.key.cmp(&b.key));

    SortedIndex { entries }
}

// =============================================================================
// Binary Search
// =============================================================================

/// Binary search over `index` for the key of `target_name`.
///
/// On duplicate keys any one of them may be returned; use [`find_all`]
/// when every match matters.
pub fn binary_search<'a>(index: &SortedIndex<'a>, target_name: &str) -> SearchOutcome<'a> {
    let target = normalize(target_name);
    let entries = index.entries();

    let (mut low, mut high) = (0usize, entries.len());
    let mut steps = 0;

    // Half-open window [low, high)
    while low < high {
        steps += 1;
        let mid = low + (high - 1 - low) / 2;
        let entry = &entries[mid];

        match entry.key.as_str().cmp(target.as_str()) {
            Ordering::Equal => {
                trace!(target = %target, steps, position = mid, "Binary search hit");
                return SearchOutcome::hit(entry.item, steps, mid);
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    trace!(target = %target, steps, "Binary search miss");
    SearchOutcome::miss(steps)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_items;

    #[test]
    fn test_sequential_search_accent_insensitive() {
        let items = sample_items();
        let outcome = sequential_search(&items, "alcool 70");

        assert!(outcome.is_found());
        assert_eq!(outcome.item.map(Item::name), Some("Álcool 70"));
        assert_eq!(outcome.steps, 5);
        assert_eq!(outcome.position, Some(4));
    }

    #[test]
    fn test_sequential_search_first_item() {
        let items = sample_items();
        let outcome = sequential_search(&items, "  REAGENTE a ");
        assert_eq!(outcome.item.map(Item::name), Some("Reagente A"));
        assert_eq!(outcome.steps, 1);
        assert_eq!(outcome.position, Some(0));
    }

    #[test]
    fn test_sequential_search_miss_scans_everything() {
        let items = sample_items();
        let outcome = sequential_search(&items, "Bisturi");
        assert_eq!(outcome, SearchOutcome::miss(items.len()));

        let outcome = sequential_search(&[], "Bisturi");
        assert_eq!(outcome.steps, 0);
        assert_eq!(outcome.position, None);
    }

    #[test]
    fn test_sequential_search_returns_first_duplicate() {
        let items = vec![
            Item::new("Gaze", 1, "2026-01-01"),
            Item::new("Álcool 70", 2, "2026-01-01"),
            Item::new("ALCOOL 70", 3, "2026-01-01"),
        ];
        let outcome = sequential_search(&items, "alcool 70");
        assert_eq!(outcome.item.map(Item::quantity), Some(2));
        assert_eq!(outcome.position, Some(1));
        assert_eq!(outcome.steps, 2);
    }

    #[test]
    fn test_find_all_returns_every_collision() {
        let items = vec![
            Item::new("Álcool 70", 2, "2026-01-01"),
            Item::new("Gaze", 1, "2026-01-01"),
            Item::new("ALCOOL 70", 3, "2026-01-01"),
        ];
        let matches = find_all(&items, "alcool 70");
        let found: Vec<(usize, u32)> = matches.iter().map(|(i, it)| (*i, it.quantity())).collect();
        assert_eq!(found, vec![(0, 2), (2, 3)]);
        assert!(find_all(&items, "Seringa").is_empty());
    }

    #[test]
    fn test_select_match_checks_the_key() {
        let items = vec![
            Item::new("Álcool 70", 12, "2026-08-15"),
            Item::new("Gaze", 1, "2026-01-01"),
            Item::new("ALCOOL 70", 1, "2029-01-01"),
        ];

        let picked = select_match(&items, "alcool 70", 2).unwrap();
        assert_eq!((picked.name(), picked.quantity()), ("ALCOOL 70", 1));

        assert!(matches!(
            select_match(&items, "alcool 70", 1),
            Err(CoreError::NoMatchAtIndex { index: 1, .. })
        ));
        assert!(matches!(
            select_match(&items, "alcool 70", 9),
            Err(CoreError::NoMatchAtIndex { index: 9, .. })
        ));
        assert!(matches!(
            select_match(&items, "Seringa", 0),
            Err(CoreError::ItemNotFound(name)) if name == "Seringa"
        ));
    }

    #[test]
    fn test_position_of_tells_duplicates_apart() {
        let items = vec![
            Item::new("Luvas", 20, "2025-11-20"),
            Item::new("Gaze", 1, "2026-01-01"),
            Item::new("Luvas", 4, "2026-01-15"),
        ];
        let index = build_sorted_index(&items);

        assert_eq!(index.position_of(&items[1]), Some(0));
        assert_eq!(index.position_of(&items[0]), Some(1));
        assert_eq!(index.position_of(&items[2]), Some(2));

        // Equal value, different allocation
        let lookalike = items[0].clone();
        assert_eq!(index.position_of(&lookalike), None);
    }

    #[test]
    fn test_sorted_index_keys() {
        let items = sample_items();
        let index = build_sorted_index(&items);
        let keys: Vec<&str> = index.keys().collect();
        assert_eq!(
            keys,
            vec!["alcool 70", "luvas", "reagente a", "reagente b", "seringa"]
        );
    }

    #[test]
    fn test_sorted_index_is_stable_on_ties() {
        let items = vec![
            Item::new("b", 1, ""),
            Item::new("A", 2, ""),
            Item::new("á", 3, ""),
        ];
        let index = build_sorted_index(&items);
        let quantities: Vec<u32> = index.entries().iter().map(|e| e.item.quantity()).collect();
        assert_eq!(quantities, vec![2, 3, 1]);
    }

    #[test]
    fn test_binary_search_hit_on_first_probe() {
        let items = sample_items();
        let index = build_sorted_index(&items);
        let outcome = binary_search(&index, "Reagente A");

        assert_eq!(outcome.item.map(Item::name), Some("Reagente A"));
        assert_eq!(outcome.position, Some(2));
        assert_eq!(outcome.steps, 1);
    }

    #[test]
    fn test_binary_search_every_sample_item() {
        let items = sample_items();
        let index = build_sorted_index(&items);

        let expected_steps = [
            ("Álcool 70", 2, 0),
            ("Luvas", 3, 1),
            ("Reagente A", 1, 2),
            ("Reagente B", 2, 3),
            ("Seringa", 3, 4),
        ];
        for (name, steps, position) in expected_steps {
            let outcome = binary_search(&index, name);
            assert_eq!(outcome.item.map(Item::name), Some(name));
            assert_eq!(outcome.steps, steps, "steps for {name}");
            assert_eq!(outcome.position, Some(position), "position for {name}");
        }
    }

    #[test]
    fn test_binary_search_miss_is_log_bounded() {
        let items = sample_items();
        let index = build_sorted_index(&items);

        for name in ["Aaa", "Mascara", "Zinco", "reagente", ""] {
            let outcome = binary_search(&index, name);
            assert!(!outcome.is_found());
            assert_eq!(outcome.position, None);
            // ceil(log2(5 + 1)) = 3
            assert!(outcome.steps >= 1 && outcome.steps <= 3, "{name}: {}", outcome.steps);
        }

        let empty = build_sorted_index(&[]);
        assert_eq!(binary_search(&empty, "Luvas"), SearchOutcome::miss(0));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn names() -> impl Strategy<Value = Vec<String>> {
            proptest::collection::btree_set("[a-zA-ZÀ-ÿ ]{1,12}", 0..20)
                .prop_map(|set| set.into_iter().collect())
        }

        proptest! {
            #[test]
            fn sorted_index_is_non_decreasing(names in names()) {
                let items: Vec<Item> = names.iter().map(|n| Item::new(n.clone(), 1, "")).collect();
                let index = build_sorted_index(&items);
                prop_assert_eq!(index.len(), items.len());
                prop_assert!(index.entries().windows(2).all(|w| w[0].key <= w[1].key));
            }

            #[test]
            fn sequential_and_binary_agree(names in names()) {
                let items: Vec<Item> = names
                    .iter()
                    .enumerate()
                    .map(|(i, n)| Item::new(n.clone(), i as u32, ""))
                    .collect();
                let index = build_sorted_index(&items);

                for item in &items {
                    // Only names whose key is unique in the set
                    if find_all(&items, item.name()).len() != 1 {
                        continue;
                    }
                    let seq = sequential_search(&items, item.name());
                    let bin = binary_search(&index, item.name());
                    prop_assert_eq!(seq.item, Some(item));
                    prop_assert_eq!(bin.item, Some(item));
                }
            }

            #[test]
            fn binary_miss_steps_are_bounded(names in names(), absent in "[0-9]{1,4}") {
                let items: Vec<Item> = names.iter().map(|n| Item::new(n.clone(), 1, "")).collect();
                let index = build_sorted_index(&items);

                // Digits never appear in generated names
                let outcome = binary_search(&index, &absent);
                prop_assert!(!outcome.is_found());
                let bound = (usize::BITS - items.len().leading_zeros()) as usize;
                prop_assert!(outcome.steps <= bound);
            }
        }
    }
}
