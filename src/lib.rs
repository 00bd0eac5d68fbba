//! Sortable HTML data table rendering for server-side web applications
//!
//! This crate builds table columns over a row collection, derives sort-toggle
//! URLs from the current request's query string, and renders header and cell
//! markup. Sort state lives entirely in the URL: every sort decision is a
//! pure function of an explicit [`RequestContext`], so there are no hidden
//! request globals.
//!
//! # Features
//!
//! - **Column definition**: declarative [`ColumnSpec`] configuration with
//!   labels, per-column default directions, and CSS classes
//! - **Sorting**: query-string driven (`?sort=field&dir=asc`), with
//!   configurable key names via [`TableConfig`]
//! - **Sort links**: header cells link to the URL that toggles the sort,
//!   preserving all other query parameters
//! - **Cell renderers**: optional per-column closures producing cell markup,
//!   with HTML-escaped field-access fallback
//!
//! # Example
//!
//! ```rust
//! use webgrid::{ColumnSpec, RequestContext, Table};
//! use std::collections::HashMap;
//!
//! let rows = vec![
//!     HashMap::from([("name".to_string(), "Terraria".to_string())]),
//!     HashMap::from([("name".to_string(), "Celeste".to_string())]),
//! ];
//!
//! let mut table = Table::with_rows(rows);
//! table.add_column(ColumnSpec::labeled("name", "Name")).unwrap();
//! table.default_sort("name").unwrap();
//!
//! let ctx = RequestContext::from_uri("/games?sort=name&dir=desc");
//! let html = table.render(&ctx);
//! assert!(html.contains("sort=name&amp;dir=asc"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod config;
pub mod error;
pub mod html;
pub mod request;
pub mod row;
pub mod sort;
pub mod table;

// Re-exports for convenience
pub use column::{Column, ColumnOptions, ColumnSpec, Renderer};
pub use config::TableConfig;
pub use error::{Result, TableError};
pub use request::RequestContext;
pub use row::Row;
pub use sort::SortDirection;
pub use table::Table;
