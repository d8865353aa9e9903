//! Rectangular 2D grid of cell values.

use crate::error::{BulkError, Result};

/// Row-major rectangular grid of values to load.
///
/// Rows are records; columns line up positionally with the target table's
/// columns. Construction is the precondition gate: once a `Grid` exists it
/// is guaranteed to be a non-empty rectangle, so the loader never has to
/// re-check shape after opening a connection.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
    cols: usize,
}

impl<T> Grid<T> {
    /// Build a grid from rows.
    ///
    /// # Errors
    ///
    /// Returns [`BulkError::Shape`] if there are no rows, if rows have no
    /// columns, or if any row's length differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(BulkError::Shape("grid has no rows".to_string()));
        };

        let cols = first.len();
        if cols == 0 {
            return Err(BulkError::Shape("grid rows have no columns".to_string()));
        }

        if let Some((idx, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != cols)
        {
            return Err(BulkError::Shape(format!(
                "row {} has {} columns, expected {}",
                idx,
                row.len(),
                cols
            )));
        }

        Ok(Self { rows, cols })
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.cols
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.rows.iter().map(Vec::as_slice)
    }
}
