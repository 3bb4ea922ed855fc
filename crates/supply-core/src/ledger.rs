//! # Consumption Ledger
//!
//! Append-only record of consumed items for one session.
//!
//! ## Views
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       register(A), register(B), register(C)             │
//! │                                                                         │
//! │  chronological_view()   [A, B, C]    oldest first (queue order)         │
//! │  reverse_view()         [C, B, A]    newest first (stack order)         │
//! │  items()                &[A, B, C]   borrowed, for search/index builds  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both views are computed on every call from the single backing `Vec`, so
//! the reverse view can never go stale. They return owned copies: changing
//! a returned `Vec` does not touch the ledger.
//!
//! ## Thread Safety
//! The ledger is a plain value with no interior mutability. A concurrent
//! host should wrap it in `Arc<Mutex<Ledger>>` so readers never observe a
//! half-finished append.

use tracing::debug;

use crate::types::Item;

/// Append-only, insertion-ordered store of [`Item`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    items: Vec<Item>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item`. Always succeeds; validation is the caller's job.
    pub fn register(&mut self, item: Item) {
        debug!(
            name = item.name(),
            quantity = item.quantity(),
            expiry = item.expiry(),
            position = self.items.len(),
            "Registered consumption"
        );
        self.items.push(item);
    }

    /// Snapshot in registration order, oldest first.
    pub fn chronological_view(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Snapshot in reverse registration order, newest first.
    pub fn reverse_view(&self) -> Vec<Item> {
        self.items.iter().rev().cloned().collect()
    }

    /// Borrowed view in registration order.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Quantities in registration order, the input of the quantity sorts.
    pub fn quantities(&self) -> Vec<u32> {
        self.items.iter().map(Item::quantity).collect()
    }

    /// Registered names in registration order (duplicates included).
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(Item::name).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Extend<Item> for Ledger {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iter: I) {
        for item in iter {
            self.register(item);
        }
    }
}

impl FromIterator<Item> for Ledger {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut ledger = Ledger::new();
        ledger.extend(iter);
        ledger
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
