//! # pgbulk
//!
//! PostgreSQL bulk-load and table-inspection helpers.
//!
//! This crate is glue over the `tokio-postgres` driver and a small
//! text-table formatter. It provides:
//!
//! - **Bulk inserts**: render a [`Grid`] as a single multi-row `INSERT`,
//!   either as raw literals or with bound parameters
//! - **Dry runs**: validate a grid's shape against the live schema and
//!   preview the load without writing
//! - **Table summaries**: schema metadata, row count, and boundary rows as
//!   a formatted report
//!
//! Each entry point opens one connection scoped to its own body and closes
//! it on every exit path. There is no pooling, no retry layer, and no
//! coordination between concurrent callers.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pgbulk::Grid;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pgbulk::BulkError> {
//!     let dsn = "host=localhost user=postgres dbname=market";
//!     let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]])?;
//!
//!     pgbulk::dry_run(dsn, "ticks", &grid).await?;
//!     let inserted = pgbulk::insert_rows(dsn, "ticks", &grid, false).await?;
//!     println!("inserted {inserted} rows");
//!
//!     let report = pgbulk::describe_table(dsn, "ticks", "id").await?;
//!     println!("{report}");
//!     Ok(())
//! }
//! ```

pub mod connect;
pub mod core;
pub mod error;
pub mod inspect;
pub mod loader;
pub mod report;
pub mod sql;

// Re-exports for convenient access
pub use crate::core::{Grid, SqlValue};
pub use error::{BulkError, Result};
pub use inspect::describe_table;
pub use loader::{dry_run, insert_rows, insert_rows_checked};
pub use report::TextTable;
pub use sql::values_literal;
