//! # Normalization Module
//!
//! Folds free text into the canonical key used for every name comparison,
//! and classifies numeric-looking input.
//!
//! ## Folding Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         normalize("  Álcool 70 ")                       │
//! │                                                                         │
//! │  1. NFKD decomposition      "  A\u{301}lcool 70 "                       │
//! │  2. Drop combining marks    "  Alcool 70 "                              │
//! │  3. Unicode case fold       "  alcool 70 "                              │
//! │  4. Trim whitespace         "alcool 70"                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Case folding is the full Unicode default fold, so `"STRASSE"` and
//! `"Straße"` share a key, which plain lowercasing would miss.

use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

/// Folds `text` to its comparison key.
///
/// Total and deterministic. Whitespace-only input yields an empty key.
///
/// ## Example
/// ```rust
/// use supply_core::normalize::normalize;
///
/// assert_eq!(normalize("Álcool 70"), normalize("alcool 70"));
/// assert_eq!(normalize("   "), "");
/// ```
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .nfkd()
        .filter(|c| canonical_combining_class(*c) == 0)
        .collect();

    caseless::default_case_fold_str(&stripped).trim().to_string()
}

/// Returns true if `text` reads as a number.
///
/// Commas count as decimal separators (`"3,5"` is numeric). Anything the
/// float parser accepts passes, including signs, exponents and `inf`.
/// Empty input is not numeric.
///
/// ## Example
/// ```rust
/// use supply_core::normalize::is_numeric;
///
/// assert!(is_numeric("12,5"));
/// assert!(!is_numeric("Luvas"));
/// ```
pub fn is_numeric(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }

    text.replace(',', ".").parse::<f64>().is_ok()
}

// =============================================================================
// Unit Tests
// =============================================================================
