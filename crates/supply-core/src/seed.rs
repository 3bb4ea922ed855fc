//! # Seed Data
//!
//! The simulated consumption a fresh session starts with.
//!
//! Explicit constructors instead of shared globals: every caller gets its
//! own copy.

use crate::ledger::Ledger;
use crate::types::Item;

/// Simulated items as `(name, quantity, expiry)`, in registration order.
pub const SAMPLE_ITEMS: &[(&str, u32, &str)] = &[
    ("Reagente A", 5, "2026-02-01"),
    ("Seringa", 10, "2027-12-31"),
    ("Reagente B", 7, "2026-05-10"),
    ("Luvas", 20, "2025-11-20"),
    ("Álcool 70", 12, "2026-08-15"),
];

/// The sample items as owned [`Item`]s.
pub fn sample_items() -> Vec<Item> {
    SAMPLE_ITEMS.iter().map(|&entry| Item::from(entry)).collect()
}

/// A ledger with every sample item registered.
pub fn sample_ledger() -> Ledger {
    sample_items().into_iter().collect()
}
