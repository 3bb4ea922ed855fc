//! # supply-core: Pure Consumption Logic for the Supply Tracker
//!
//! This crate holds everything the console does that is not I/O: the
//! ledger of consumed items, name folding, expiry parsing, searching and
//! sorting.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Supply Tracker Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/console (menus, prompts, tables)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ validated arguments                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ supply-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ normalize │  │  expiry   │  │  search   │  │   sort    │  │   │
//! │  │   │ key fold  │  │ date parse│  │ seq / bin │  │merge/quick│  │   │
//! │  │   │ is_numeric│  │ sort key  │  │SortedIndex│  │ by expiry │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  ledger   │  │  resolve  │  │validation │  │   seed    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO GLOBAL STATE                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The [`Item`] record
//! - [`normalize`] - Name keys and the numeric guard
//! - [`expiry`] - Expiry date parsing
//! - [`search`] - Sequential and binary search
//! - [`sort`] - Merge sort, quick sort, expiry ordering
//! - [`ledger`] - The append-only consumption ledger
//! - [`resolve`] - Typed name to registered name(s)
//! - [`validation`] - Registration input checks
//! - [`seed`] - Simulated starting data
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use supply_core::search::{binary_search, build_sorted_index, sequential_search};
//! use supply_core::seed::sample_ledger;
//! use supply_core::sort::{merge_sort, order_by_expiry};
//!
//! let ledger = sample_ledger();
//!
//! let hit = sequential_search(ledger.items(), "alcool 70");
//! assert_eq!(hit.position, Some(4));
//!
//! let index = build_sorted_index(ledger.items());
//! assert!(binary_search(&index, "Luvas").is_found());
//!
//! assert_eq!(merge_sort(&ledger.quantities()), vec![5, 7, 10, 12, 20]);
//! assert_eq!(order_by_expiry(ledger.items())[0].name(), "Luvas");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod expiry;
pub mod ledger;
pub mod normalize;
pub mod resolve;
pub mod search;
pub mod seed;
pub mod sort;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::Ledger;
pub use resolve::NameResolution;
pub use search::{SearchOutcome, SortedIndex};
pub use types::Item;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum characters in an item name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum quantity accepted for one registration.
///
/// ## Business Reason
/// Catches slipped keystrokes (typing 200000 instead of 20).
pub const MAX_QUANTITY: u32 = 999_999;
