//! Table-wide configuration

use crate::sort::SortDirection;
use serde::{Deserialize, Serialize};

/// Query key names and defaults shared by every column of a table
///
/// The two key names decide where sort state lives in the URL; the default
/// direction applies to columns that declare none of their own.
///
/// # Examples
///
/// ```
/// use webgrid::{SortDirection, TableConfig};
///
/// let config = TableConfig::default()
///     .sort_field_key("order_by")
///     .default_direction(SortDirection::Descending);
/// assert_eq!(config.sort_field_key, "order_by");
/// assert_eq!(config.sort_dir_key, "dir");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
	/// Query key carrying the sorted field name
	pub sort_field_key: String,
	/// Query key carrying the sort direction
	pub sort_dir_key: String,
	/// Direction used when neither the request nor the column specifies one
	pub default_direction: SortDirection,
}

impl TableConfig {
	/// Sets the query key carrying the sorted field name
	pub fn sort_field_key(mut self, key: impl Into<String>) -> Self {
		self.sort_field_key = key.into();
		self
	}

	/// Sets the query key carrying the sort direction
	pub fn sort_dir_key(mut self, key: impl Into<String>) -> Self {
		self.sort_dir_key = key.into();
		self
	}

	/// Sets the fallback sort direction
	pub fn default_direction(mut self, direction: SortDirection) -> Self {
		self.default_direction = direction;
		self
	}
}

impl Default for TableConfig {
	fn default() -> Self {
		Self {
			sort_field_key: "sort".to_string(),
			sort_dir_key: "dir".to_string(),
			default_direction: SortDirection::Ascending,
		}
	}
}
