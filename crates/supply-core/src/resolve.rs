//! # Name Resolution
//!
//! Turns what a user typed into the registered name(s) it refers to, before
//! any search runs.
//!
//! ## Decision Flow
//! ```text
//! query ──► empty? ─────────────────────────────► Empty
//!   │
//!   ├──► numeric? ──────────────────────────────► Numeric
//!   │
//!   ├──► key equals some candidate key? ────────► Matched([names...])
//!   │
//!   ├──► key contained in candidate keys? ──────► Suggestions([names...])
//!   │
//!   └──► ───────────────────────────────────────► NotFound
//! ```

use crate::normalize::{is_numeric, normalize};

/// Default cap on "did you mean" hints.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Outcome of resolving a typed name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameResolution {
    /// Nothing but whitespace was typed.
    Empty,
    /// The query looks like a number; names cannot be numeric.
    Numeric,
    /// Distinct registered names sharing the query's key, in ledger order.
    /// Items registered under the same name appear once here; use
    /// [`find_all`](crate::search::find_all) to tell them apart.
    Matched(Vec<String>),
    /// No exact key match; registered names whose key contains the query.
    Suggestions(Vec<String>),
    /// No exact match and nothing similar.
    NotFound,
}

/// Resolves `query` against `candidates` (registered names, ledger order).
///
/// ## Example
/// ```rust
/// use supply_core::resolve::{resolve_name, NameResolution};
///
/// let names = ["Reagente A", "Reagente B", "Luvas"];
/// assert_eq!(
///     resolve_name(names, "luvas", 5),
///     NameResolution::Matched(vec!["Luvas".to_string()])
/// );
/// assert_eq!(
///     resolve_name(names, "reag", 5),
///     NameResolution::Suggestions(vec!["Reagente A".to_string(), "Reagente B".to_string()])
/// );
/// ```
pub fn resolve_name<I, S>(candidates: I, query: &str, max_suggestions: usize) -> NameResolution
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if query.trim().is_empty() {
        return NameResolution::Empty;
    }
    if is_numeric(query) {
        return NameResolution::Numeric;
    }

    let target = normalize(query);
    let mut exact: Vec<String> = Vec::new();
    let mut similar: Vec<String> = Vec::new();

    for candidate in candidates {
        let name = candidate.as_ref();
        let key = normalize(name);

        if key == target {
            push_unique(&mut exact, name);
        } else if exact.is_empty() && key.contains(&target) {
            push_unique(&mut similar, name);
        }
    }

    if !exact.is_empty() {
        return NameResolution::Matched(exact);
    }

    similar.truncate(max_suggestions);
    if similar.is_empty() {
        NameResolution::NotFound
    } else {
        NameResolution::Suggestions(similar)
    }
}

fn push_unique(names: &mut Vec<String>, name: &str) {
    if !names.iter().any(|n| n == name) {
        names.push(name.to_string());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
