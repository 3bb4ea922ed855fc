//! # Expiry Dates
//!
//! Parses the free-text expiry carried by an [`Item`](crate::Item).
//!
//! Accepted shapes:
//! - `2026-02-01`
//! - `Validade: 2026-02-01` (label is case-insensitive)
//!
//! Anything else parses to `None`. Callers treat `None` as "unknown" and
//! sort it after every real date.

use chrono::NaiveDate;

/// Label that may precede the date.
pub const EXPIRY_LABEL: &str = "validade:";

/// Parses an expiry string into a calendar date.
///
/// Never fails loudly: wrong component count, non-integer parts and
/// impossible dates (`2026-02-30`) all yield `None`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use supply_core::expiry::parse_expiry;
///
/// assert_eq!(parse_expiry("VALIDADE: 2026-02-01"), NaiveDate::from_ymd_opt(2026, 2, 1));
/// assert_eq!(parse_expiry("2026-13-01"), None);
/// ```
pub fn parse_expiry(text: &str) -> Option<NaiveDate> {
    let text = strip_label(text.trim());

    let mut parts = text.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let year: i32 = year.trim().parse().ok()?;
    let month: u32 = month.trim().parse().ok()?;
    let day: u32 = day.trim().parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Sort key for expiry ordering: `(undated, date)`.
///
/// Unknown dates become `(true, NaiveDate::MAX)`. The leading flag keeps
/// them after a real expiry of `NaiveDate::MAX` itself.
#[inline]
pub fn expiry_sort_key(text: &str) -> (bool, NaiveDate) {
    match parse_expiry(text) {
        Some(date) => (false, date),
        None => (true, NaiveDate::MAX),
    }
}

fn strip_label(text: &str) -> &str {
    match text.get(..EXPIRY_LABEL.len()) {
        Some(head) if head.eq_ignore_ascii_case(EXPIRY_LABEL) => {
            text[EXPIRY_LABEL.len()..].trim()
        }
        _ => text,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
