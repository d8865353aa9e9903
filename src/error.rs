//! Error types for load and inspection operations.

use thiserror::Error;

/// Main error type for the crate.
///
/// Shape and schema violations are raised before (or instead of) touching
/// the database; everything the driver raises is carried through unchanged
/// in [`BulkError::Db`]. There is no retry layer, so transient and permanent
/// database failures surface identically.
#[derive(Error, Debug)]
pub enum BulkError {
    /// Input grid is not a non-empty rectangle.
    #[error("Shape error: {0}")]
    Shape(String),

    /// The metadata query returned no columns for the table.
    ///
    /// A table that exists but has zero columns is reported the same way;
    /// `information_schema.columns` cannot tell the two apart.
    #[error("The table '{0}' does not exist")]
    MissingTable(String),

    /// The live column count disagrees with the grid's column count.
    #[error(
        "Table '{table}' has {expected} columns but the data has {found}"
    )]
    ColumnMismatch {
        table: String,
        expected: usize,
        found: usize,
    },

    /// An identifier failed validation (empty, null byte, overlong).
    #[error("Invalid identifier: {0}")]
    Identifier(String),

    /// The connection descriptor could not be parsed.
    #[error("Connection descriptor error: {0}")]
    Descriptor(String),

    /// PostgreSQL driver error, propagated unchanged.
    #[error("Database error: {0}")]
    Db(#[from] tokio_postgres::Error),
}

/// Result type alias for load and inspection operations.
pub type Result<T> = std::result::Result<T, BulkError>;
