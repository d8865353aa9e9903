//! Statement builders for the loader and the inspector.
//!
//! Identifiers are quoted through [`quote_ident`]; values either come from
//! the raw literal builder or are bound as parameters. The metadata queries
//! bind the table name as `$1`; the `::text` casts keep the driver from
//! tripping over `information_schema`'s identifier domain types.

use std::fmt::Write;

use crate::core::identifier::quote_ident;
use crate::error::Result;

/// Column names of a table, in ordinal order. Table name is `$1`.
pub const COLUMNS_QUERY: &str = "SELECT column_name::text \
     FROM information_schema.columns WHERE table_name = $1 \
     ORDER BY ordinal_position";

/// Column name, data type, and nullability of a table, in ordinal order.
/// Table name is `$1`.
pub const SCHEMA_QUERY: &str = "SELECT column_name::text, data_type::text, is_nullable::text \
     FROM information_schema.columns WHERE table_name = $1 \
     ORDER BY ordinal_position";

/// Build a bulk `INSERT` with a pre-rendered values list.
pub fn build_insert(table: &str, values_list: &str) -> Result<String> {
    Ok(format!(
        "INSERT INTO {} VALUES {}",
        quote_ident(table)?,
        values_list
    ))
}

/// Build a bulk `INSERT` with one numbered placeholder per cell:
/// `INSERT INTO "t" VALUES ($1, $2), ($3, $4), ...`.
pub fn build_insert_checked(table: &str, rows: usize, cols: usize) -> Result<String> {
    let mut sql = format!("INSERT INTO {} VALUES ", quote_ident(table)?);
    let mut param = 1usize;
    for row in 0..rows {
        if row > 0 {
            sql.push_str(", ");
        }
        sql.push('(');
        for col in 0..cols {
            if col > 0 {
                sql.push_str(", ");
            }
            let _ = write!(sql, "${}", param);
            param += 1;
        }
        sql.push(')');
    }
    Ok(sql)
}

/// Build the row-count query.
pub fn build_count(table: &str) -> Result<String> {
    Ok(format!("SELECT COUNT(*) FROM {}", quote_ident(table)?))
}

/// Build the boundary-rows query: the row with the minimum value of the
/// order column followed by the row with the maximum value.
pub fn build_boundary(table: &str, order_column: &str) -> Result<String> {
    let table = quote_ident(table)?;
    let col = quote_ident(order_column)?;
    Ok(format!(
        "(SELECT * FROM {table} ORDER BY {col} ASC LIMIT 1) \
         UNION ALL \
         (SELECT * FROM {table} ORDER BY {col} DESC LIMIT 1)"
    ))
}
