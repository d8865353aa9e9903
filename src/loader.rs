//! Bulk insert execution and dry-run validation.

use std::fmt::Display;

use tokio_postgres::types::ToSql;
use tracing::{debug, info};

use crate::connect::ScopedConn;
use crate::core::{Grid, SqlValue};
use crate::error::{BulkError, Result};
use crate::report::TextTable;
use crate::sql;

/// How many real rows a dry-run preview shows before the ellipsis row.
const PREVIEW_ROWS: usize = 3;

/// Bulk-insert a grid as one `INSERT INTO <table> VALUES ...` statement.
///
/// The values list is spliced in as raw literals (see
/// [`crate::sql::literal`] for the injection caveat). With `quote` set,
/// every cell is wrapped in single quotes. Nothing is validated against the
/// live schema; a column-count or type mismatch surfaces as the driver's
/// error. All rows ride in one statement, so a failure inserts nothing.
///
/// Returns the number of rows inserted.
pub async fn insert_rows<T: Display>(
    descriptor: &str,
    table: &str,
    grid: &Grid<T>,
    quote: bool,
) -> Result<u64> {
    let statement = sql::build_insert(table, &sql::values_literal(grid, quote))?;

    let conn = ScopedConn::open(descriptor).await?;
    debug!(table, rows = grid.row_count(), "executing bulk insert");
    let inserted = conn.client().execute(statement.as_str(), &[]).await?;
    info!(table, rows = inserted, "bulk insert committed");
    Ok(inserted)
}

/// Bulk-insert a grid of [`SqlValue`] cells with bound parameters.
///
/// Same single-statement, all-or-nothing semantics as [`insert_rows`], but
/// cells travel as parameters instead of spliced literals, so value content
/// cannot corrupt the statement. PostgreSQL caps bound parameters at 65535
/// per statement; loads larger than that belong in the literal path.
pub async fn insert_rows_checked(
    descriptor: &str,
    table: &str,
    grid: &Grid<SqlValue>,
) -> Result<u64> {
    let statement = sql::build_insert_checked(table, grid.row_count(), grid.col_count())?;
    let params: Vec<&(dyn ToSql + Sync)> = grid
        .rows()
        .flatten()
        .map(|cell| cell as &(dyn ToSql + Sync))
        .collect();

    let conn = ScopedConn::open(descriptor).await?;
    debug!(table, rows = grid.row_count(), "executing parameterized bulk insert");
    let inserted = conn.client().execute(statement.as_str(), &params).await?;
    info!(table, rows = inserted, "bulk insert committed");
    Ok(inserted)
}

/// Validate a grid against the live table without writing anything.
///
/// Fetches the table's column list, checks the grid's column count against
/// it, and prints a preview of the first rows to stdout. Quoting is
/// irrelevant here since nothing is executed as SQL.
///
/// # Errors
///
/// [`BulkError::MissingTable`] if the metadata query returns no columns;
/// [`BulkError::ColumnMismatch`] if the counts disagree.
pub async fn dry_run<T: Display>(descriptor: &str, table: &str, grid: &Grid<T>) -> Result<()> {
    let conn = ScopedConn::open(descriptor).await?;
    let rows = conn.client().query(sql::COLUMNS_QUERY, &[&table]).await?;
    drop(conn);

    let columns: Vec<String> = rows.iter().map(|row| row.get(0)).collect();
    if columns.is_empty() {
        return Err(BulkError::MissingTable(table.to_string()));
    }
    if columns.len() != grid.col_count() {
        return Err(BulkError::ColumnMismatch {
            table: table.to_string(),
            expected: columns.len(),
            found: grid.col_count(),
        });
    }

    debug!(table, columns = columns.len(), "insertion shape is valid");
    println!("{}", render_preview(table, &columns, grid));
    Ok(())
}

/// Preview: up to [`PREVIEW_ROWS`] rows plus one ellipsis row under the
/// live column headers, then the validity confirmation.
fn render_preview<T: Display>(table: &str, columns: &[String], grid: &Grid<T>) -> String {
    let mut preview = TextTable::new(columns.to_vec());
    for row in grid.rows().take(PREVIEW_ROWS) {
        preview.push_row(row.iter().map(ToString::to_string).collect());
    }
    preview.push_row(columns.iter().map(|_| "...".to_string()).collect());

    format!(
        "Insert values into {}:\n{}\n\nInsertion shape is valid.",
        table,
        preview.render()
    )
}
