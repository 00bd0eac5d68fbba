//! Column definitions and sort-state resolution

mod base;
mod spec;

pub use base::{Column, Renderer};
pub use spec::{ColumnOptions, ColumnSpec};
