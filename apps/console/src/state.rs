//! # Ledger State
//!
//! Holds the session's ledger.
//!
//! ## Thread Safety
//! The console drives the ledger from a single thread, but the ledger is
//! still wrapped in `Arc<Mutex<T>>` so any second actor (a future server
//! front end, a test harness) sees whole appends only:
//! 1. Appends take the lock exclusively
//! 2. Snapshots and searches run entirely under the lock
//! 3. A sorted index is built and used inside one lock scope, so it always
//!    matches the ledger it searches

use std::sync::{Arc, Mutex};

use supply_core::{Item, Ledger};

/// Shared handle to the session ledger.
#[derive(Debug, Clone, Default)]
pub struct LedgerState {
    ledger: Arc<Mutex<Ledger>>,
}

impl LedgerState {
    /// Wraps an existing ledger (usually the seeded one).
    pub fn new(ledger: Ledger) -> Self {
        LedgerState {
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Executes a function with read access to the ledger.
    pub fn with_ledger<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Ledger) -> R,
    {
        let ledger = self.ledger.lock().expect("Ledger mutex poisoned");
        f(&ledger)
    }

    /// Appends an item under the lock.
    pub fn register(&self, item: Item) {
        let mut ledger = self.ledger.lock().expect("Ledger mutex poisoned");
        ledger.register(item);
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.with_ledger(Ledger::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_register_through_state() {
        let state = LedgerState::default();
        assert!(state.is_empty());

        state.register(Item::new("Gaze", 1, "2026-01-01"));
        assert_eq!(state.len(), 1);
        assert_eq!(state.with_ledger(|l| l.names().join(",")), "Gaze");
    }

    #[test]
    fn test_concurrent_appends_are_whole() {
        let state = LedgerState::default();

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let state = state.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        state.register(Item::new(format!("item {t}-{i}"), i, "2026-01-01"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(state.len(), 100);
        state.with_ledger(|ledger| {
            let mut reversed = ledger.chronological_view();
            reversed.reverse();
            assert_eq!(ledger.reverse_view(), reversed);
        });
    }
}
