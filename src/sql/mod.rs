//! SQL text construction.
//!
//! [`literal`] builds raw values-list fragments with no escaping; [`query`]
//! builds the complete statements the loader and inspector execute.

pub mod literal;
pub mod query;

pub use literal::values_literal;
pub use query::{
    build_boundary, build_count, build_insert, build_insert_checked, COLUMNS_QUERY, SCHEMA_QUERY,
};
