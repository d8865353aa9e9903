//! Pipe-delimited text tables for human-readable reports.

use std::fmt::Write;

/// A small pipe-table renderer: header row, dash rule, one line per record,
/// columns padded to the widest cell.
#[derive(Debug, Clone)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    /// Create a table with the given column headers.
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a record. Missing trailing cells render empty.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render the table. No trailing newline.
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(String::len).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.len());
            }
        }

        let mut out = String::new();
        Self::write_line(&mut out, &self.headers, &widths);
        out.push('\n');
        for width in &widths {
            let _ = write!(out, "|{}", "-".repeat(width + 2));
        }
        out.push('|');
        for row in &self.rows {
            out.push('\n');
            Self::write_line(&mut out, row, &widths);
        }
        out
    }

    fn write_line(out: &mut String, cells: &[String], widths: &[usize]) {
        for (i, &width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let _ = write!(out, "| {:<w$} ", cell, w = width);
        }
        out.push('|');
    }
}
