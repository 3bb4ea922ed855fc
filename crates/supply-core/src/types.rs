//! # Domain Types
//!
//! Core domain types used throughout the supply tracker.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────────────────────────┐    │
//! │  │      Item       │        │            Derived (never stored)    │    │
//! │  │  ─────────────  │        │  ─────────────────────────────────   │    │
//! │  │  name           │ ─────► │  key()     normalized name           │    │
//! │  │  quantity (u32) │        │  expiry_date()  parsed expiry        │    │
//! │  │  expiry (text)  │        └─────────────────────────────────────┘    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! An item has no id. For search purposes its identity is the normalized
//! name, and two items may share it: callers disambiguate, the core never
//! merges them.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::expiry::parse_expiry;
use crate::normalize::normalize;

// =============================================================================
// Item
// =============================================================================

/// A consumed supply item.
///
/// Immutable once created: fields are private and only readable.
/// The expiry stays as text (`YYYY-MM-DD`, optionally prefixed with a
/// `Validade:` label) so unparseable values survive registration and sort
/// last instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    quantity: u32,
    expiry: String,
}

impl Item {
    /// Creates a new item.
    pub fn new(name: impl Into<String>, quantity: u32, expiry: impl Into<String>) -> Self {
        Item {
            name: name.into(),
            quantity,
            expiry: expiry.into(),
        }
    }

    /// Display name exactly as registered.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consumed quantity.
    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Raw expiry text as registered.
    #[inline]
    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    /// Normalized name used for equality and ordering.
    pub fn key(&self) -> String {
        normalize(&self.name)
    }

    /// Parsed expiry date, or `None` if the text is not a valid date.
    pub fn expiry_date(&self) -> Option<NaiveDate> {
        parse_expiry(&self.expiry)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.name, self.quantity, self.expiry)
    }
}

impl<N: Into<String>, E: Into<String>> From<(N, u32, E)> for Item {
    fn from((name, quantity, expiry): (N, u32, E)) -> Self {
        Item::new(name, quantity, expiry)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
