//! # Rendering
//!
//! Plain-text output for the console. Every function returns a `String`;
//! the menu decides where it goes.
//!
//! ```text
//! #  Name        Qty  Expiry
//! ─  ──────────  ───  ──────────
//! 0  Reagente A    5  2026-02-01
//! 1  Seringa      10  2027-12-31
//! ```

use std::fmt::Write;

use supply_core::Item;

use crate::commands::{SearchReport, SearchStrategy, SortAlgorithm};

const HEADERS: [&str; 4] = ["#", "Name", "Qty", "Expiry"];

/// Renders items as an aligned table, numbered from 0.
pub fn item_table(items: &[Item]) -> String {
    if items.is_empty() {
        return "(no items registered)\n".to_string();
    }

    let rows: Vec<[String; 4]> = items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            [
                idx.to_string(),
                item.name().to_string(),
                item.quantity().to_string(),
                item.expiry().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    push_row(&mut out, &widths.map(|w| "─".repeat(w)), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(col, (cell, &width))| {
            // Quantities right-aligned, everything else left
            if col == 2 {
                format!("{cell:>width$}")
            } else {
                format!("{cell:<width$}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{}", line.trim_end());
}

/// One-line summary of a search.
pub fn search_report(report: &SearchReport) -> String {
    let location = match report.strategy {
        SearchStrategy::Sequential => "Index",
        SearchStrategy::Binary => "Position in sorted list",
    };

    let mut line = match (&report.item, report.position) {
        (Some(item), Some(position)) => format!(
            "{} - found in {} step(s). {}: {}. Item: {}",
            report.strategy, report.steps, location, position, item
        ),
        _ => format!(
            "{} - not found after {} step(s).",
            report.strategy, report.steps
        ),
    };

    if report.matches.len() > 1 {
        let indexes = report
            .matches
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let _ = write!(
            line,
            " {} items share this name (ledger indexes {}).",
            report.matches.len(),
            indexes
        );
    }
    line
}

/// Sorted quantities as `[a, b, c]`.
pub fn quantities(algorithm: SortAlgorithm, sorted: &[u32]) -> String {
    let list = sorted
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("Quantities sorted ({algorithm}): [{list}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_table_alignment() {
        let items = vec![
            Item::new("Reagente A", 5, "2026-02-01"),
            Item::new("Álcool 70", 12, "2026-08-15"),
        ];
        let table = item_table(&items);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "#  Name        Qty  Expiry");
        assert_eq!(lines[1], "─  ──────────  ───  ──────────");
        assert_eq!(lines[2], "0  Reagente A    5  2026-02-01");
        // Accented names align by characters, not bytes
        assert_eq!(lines[3], "1  Álcool 70    12  2026-08-15");
    }

    #[test]
    fn test_item_table_empty() {
        assert_eq!(item_table(&[]), "(no items registered)\n");
    }

    #[test]
    fn test_search_report() {
        let found = SearchReport {
            strategy: SearchStrategy::Binary,
            item: Some(Item::new("Luvas", 20, "2025-11-20")),
            steps: 3,
            position: Some(1),
            matches: vec![3],
        };
        assert_eq!(
            search_report(&found),
            "Binary - found in 3 step(s). Position in sorted list: 1. Item: (Luvas, 20, 2025-11-20)"
        );

        let missed = SearchReport {
            strategy: SearchStrategy::Sequential,
            item: None,
            steps: 5,
            position: None,
            matches: vec![],
        };
        assert_eq!(search_report(&missed), "Sequential - not found after 5 step(s).");
    }

    #[test]
    fn test_search_report_lists_shared_names() {
        let report = SearchReport {
            strategy: SearchStrategy::Sequential,
            item: Some(Item::new("ALCOOL 70", 1, "2029-01-01")),
            steps: 5,
            position: Some(5),
            matches: vec![4, 5],
        };
        assert_eq!(
            search_report(&report),
            "Sequential - found in 5 step(s). Index: 5. Item: (ALCOOL 70, 1, 2029-01-01) \
             2 items share this name (ledger indexes 4, 5)."
        );
    }

    #[test]
    fn test_quantities() {
        assert_eq!(
            quantities(SortAlgorithm::QuickSort, &[5, 7, 10]),
            "Quantities sorted (Quick Sort): [5, 7, 10]"
        );
    }
}
