//! Core data model shared by the loader and the inspector.

pub mod grid;
pub mod identifier;
pub mod value;

pub use grid::Grid;
pub use value::SqlValue;
