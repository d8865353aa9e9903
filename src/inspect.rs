//! Table description: schema, row count, and boundary rows.

use tokio_postgres::SimpleQueryMessage;
use tracing::debug;

use crate::connect::ScopedConn;
use crate::error::{BulkError, Result};
use crate::report::TextTable;
use crate::sql;

/// Summarize a table: schema metadata, row count, and the rows holding the
/// minimum and maximum value of `order_column`.
///
/// Three read-only queries on one scoped connection. The boundary query
/// runs over the simple-query protocol so cells of any column type arrive
/// as text, ready for rendering. In a single-row table the same row appears
/// twice; ties at an extremum resolve to whichever row the server returns
/// first.
///
/// `order_column` must exist and be orderable; an invalid name surfaces as
/// the driver's error.
///
/// # Errors
///
/// [`BulkError::MissingTable`] if the table has no columns to describe.
pub async fn describe_table(
    descriptor: &str,
    table: &str,
    order_column: &str,
) -> Result<String> {
    // Build all statements up front so identifier errors precede any I/O.
    let count_sql = sql::build_count(table)?;
    let boundary_sql = sql::build_boundary(table, order_column)?;

    let conn = ScopedConn::open(descriptor).await?;
    let client = conn.client();

    let schema_rows = client.query(sql::SCHEMA_QUERY, &[&table]).await?;
    if schema_rows.is_empty() {
        return Err(BulkError::MissingTable(table.to_string()));
    }

    let mut headers = Vec::with_capacity(schema_rows.len());
    let mut schema_table = TextTable::new(vec!["column_name", "data_type", "is_nullable"]);
    for row in &schema_rows {
        let name: String = row.get(0);
        headers.push(name.clone());
        schema_table.push_row(vec![name, row.get(1), row.get(2)]);
    }

    let mut entries = String::from("0");
    for message in client.simple_query(&count_sql).await? {
        if let SimpleQueryMessage::Row(row) = message {
            entries = row.get(0).unwrap_or("0").to_string();
        }
    }

    let mut boundary = TextTable::new(headers);
    for message in client.simple_query(&boundary_sql).await? {
        if let SimpleQueryMessage::Row(row) = message {
            boundary.push_row(
                (0..row.len())
                    .map(|i| row.get(i).unwrap_or("").to_string())
                    .collect(),
            );
        }
    }

    debug!(table, entries = %entries, "table description assembled");
    Ok(compose_report(
        table,
        &schema_table.render(),
        &entries,
        &boundary.render(),
    ))
}

fn compose_report(table: &str, schema: &str, entries: &str, boundary: &str) -> String {
    format!(
        "Table summary: {table}\n\n{schema}\n\nWith {entries} entries\n\nFirst & last being:\n{boundary}"
    )
}
