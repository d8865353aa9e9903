//! Raw values-list construction.
//!
//! WARNING: nothing here escapes cell text. The output is spliced directly
//! after a SQL `VALUES` keyword, so a cell containing a single quote
//! corrupts the statement. Callers own sanitization; for untrusted data use
//! [`crate::loader::insert_rows_checked`], which binds cells as parameters.

use std::fmt::{Display, Write};

use crate::core::Grid;

/// Render a grid as a SQL values-list literal: `(a, b), (c, d), ...`.
///
/// With `quote` set, every stringified cell is wrapped in a single-quote
/// pair. All-or-nothing: there is no per-column quoting, and embedded quotes
/// are not escaped.
///
/// Pure and deterministic; the grid's constructor already guarantees a
/// non-empty rectangle.
pub fn values_literal<T: Display>(grid: &Grid<T>, quote: bool) -> String {
    let mut out = String::new();
    for (i, row) in grid.rows().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('(');
        for (j, cell) in row.iter().enumerate() {
            if j > 0 {
                out.push_str(", ");
            }
            if quote {
                let _ = write!(out, "'{}'", cell);
            } else {
                let _ = write!(out, "{}", cell);
            }
        }
        out.push(')');
    }
    out
}
