//! # Console Commands
//!
//! One function per menu action. Each takes the [`LedgerState`], calls into
//! supply-core, and returns owned data for [`render`](crate::render) to print.
//! No prompting happens here, so every command is testable without a
//! terminal.
//!
//! ## Command Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Menu entry                     Command                 Core call       │
//! │  ──────────                     ───────                 ─────────       │
//! │  List (chronological)   ──────► list_items(Chrono)  ──► chronological_view
//! │  List (reverse)         ──────► list_items(Reverse) ──► reverse_view    │
//! │  Search (sequential)    ──────► search(Sequential)  ──► sequential_search
//! │  Search (binary)        ──────► search(Binary)      ──► build_sorted_index
//! │                                                         + binary_search │
//! │  Sort quantities        ──────► sort_quantities     ──► merge/quick_sort│
//! │  Sort by expiry         ──────► items_by_expiry     ──► order_by_expiry │
//! │  Register               ──────► register_item       ──► validate + register
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use supply_core::resolve::resolve_name;
use supply_core::search::{
    binary_search, build_sorted_index, find_all, select_match, sequential_search,
};
use supply_core::sort::{merge_sort, order_by_expiry, quick_sort};
use supply_core::validation::validate_new_item;
use supply_core::{Item, NameResolution};
use tracing::{debug, info};

use crate::error::AppResult;
use crate::state::LedgerState;

// =============================================================================
// Listing
// =============================================================================

/// Which ledger view to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    /// Oldest first.
    Chronological,
    /// Newest first.
    Reverse,
}

impl fmt::Display for ListOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListOrder::Chronological => write!(f, "chronological"),
            ListOrder::Reverse => write!(f, "reverse"),
        }
    }
}

pub fn list_items(state: &LedgerState, order: ListOrder) -> Vec<Item> {
    debug!(%order, "list_items command");
    state.with_ledger(|ledger| match order {
        ListOrder::Chronological => ledger.chronological_view(),
        ListOrder::Reverse => ledger.reverse_view(),
    })
}

// =============================================================================
// Search
// =============================================================================

/// Search algorithm picked in the search menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    Sequential,
    Binary,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStrategy::Sequential => write!(f, "Sequential"),
            SearchStrategy::Binary => write!(f, "Binary"),
        }
    }
}

/// Owned copy of a search outcome, detached from the ledger lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub strategy: SearchStrategy,
    pub item: Option<Item>,
    pub steps: usize,
    /// Ledger index (sequential) or sorted-index position (binary).
    pub position: Option<usize>,
    /// Ledger indexes of every item sharing the searched key.
    pub matches: Vec<usize>,
}

/// Resolves a typed name against the registered names.
pub fn resolve(state: &LedgerState, query: &str, max_suggestions: usize) -> NameResolution {
    debug!(query, "resolve command");
    state.with_ledger(|ledger| resolve_name(ledger.names(), query, max_suggestions))
}

/// Every registered item sharing `name`'s key, with ledger indexes.
pub fn matches_for(state: &LedgerState, name: &str) -> Vec<(usize, Item)> {
    state.with_ledger(|ledger| {
        find_all(ledger.items(), name)
            .into_iter()
            .map(|(idx, item)| (idx, item.clone()))
            .collect()
    })
}

/// Runs one search. The binary strategy builds a fresh sorted index from
/// the current ledger inside the same lock scope.
///
/// `pick` is a ledger index chosen among [`matches_for`]. When given, the
/// report carries that item and its position instead of whichever match
/// the algorithm reached first; `steps` still count the search itself.
pub fn search(
    state: &LedgerState,
    strategy: SearchStrategy,
    name: &str,
    pick: Option<usize>,
) -> AppResult<SearchReport> {
    debug!(%strategy, name, ?pick, "search command");
    let report = state.with_ledger(|ledger| -> AppResult<SearchReport> {
        let items = ledger.items();
        let matches: Vec<usize> = find_all(items, name).into_iter().map(|(idx, _)| idx).collect();
        let picked = pick
            .map(|idx| select_match(items, name, idx))
            .transpose()?;

        let (outcome, picked_position) = match strategy {
            SearchStrategy::Sequential => (sequential_search(items, name), pick),
            SearchStrategy::Binary => {
                let index = build_sorted_index(items);
                let position = picked.and_then(|item| index.position_of(item));
                (binary_search(&index, name), position)
            }
        };

        let (item, position) = match picked {
            Some(item) => (Some(item.clone()), picked_position),
            None => (outcome.item.cloned(), outcome.position),
        };

        Ok(SearchReport {
            strategy,
            item,
            steps: outcome.steps,
            position,
            matches,
        })
    })?;

    info!(
        %strategy,
        name,
        found = report.item.is_some(),
        steps = report.steps,
        matches = report.matches.len(),
        "Search finished"
    );
    Ok(report)
}

// =============================================================================
// Sorting
// =============================================================================

/// Quantity sort algorithm picked in the sort menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgorithm {
    MergeSort,
    QuickSort,
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortAlgorithm::MergeSort => write!(f, "Merge Sort"),
            SortAlgorithm::QuickSort => write!(f, "Quick Sort"),
        }
    }
}

/// Registered quantities, ascending.
pub fn sort_quantities(state: &LedgerState, algorithm: SortAlgorithm) -> Vec<u32> {
    debug!(%algorithm, "sort_quantities command");
    let quantities = state.with_ledger(|ledger| ledger.quantities());
    match algorithm {
        SortAlgorithm::MergeSort => merge_sort(&quantities),
        SortAlgorithm::QuickSort => quick_sort(&quantities),
    }
}

/// Registered items, soonest expiry first, undated last.
pub fn items_by_expiry(state: &LedgerState) -> Vec<Item> {
    debug!("items_by_expiry command");
    state.with_ledger(|ledger| order_by_expiry(ledger.items()))
}

// =============================================================================
// Registration
// =============================================================================

/// Validates raw input and appends the resulting item.
pub fn register_item(
    state: &LedgerState,
    name: &str,
    quantity: &str,
    expiry: &str,
) -> AppResult<Item> {
    let item = validate_new_item(name, quantity, expiry)?;
    state.register(item.clone());

    info!(name = item.name(), quantity = item.quantity(), "Consumption registered");
    Ok(item)
}

// =============================================================================
// Unit Tests
// =============================================================================
