//! Sort direction state

use crate::error::TableError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a column sort
///
/// Encoded in query strings as `asc` / `desc`.
///
/// # Examples
///
/// ```
/// use webgrid::SortDirection;
///
/// assert_eq!(SortDirection::Ascending.toggle(), SortDirection::Descending);
/// assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Descending);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
	/// Ascending order (`asc`)
	#[serde(rename = "asc")]
	Ascending,
	/// Descending order (`desc`)
	#[serde(rename = "desc")]
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(self) -> Self {
		match self {
			SortDirection::Ascending => SortDirection::Descending,
			SortDirection::Descending => SortDirection::Ascending,
		}
	}

	/// Returns the query-string encoding of this direction
	pub fn as_str(self) -> &'static str {
		match self {
			SortDirection::Ascending => "asc",
			SortDirection::Descending => "desc",
		}
	}

	/// Parse a direction leniently, falling back on malformed input
	///
	/// Request query values go through here: garbage in the query string must
	/// not fail a render.
	pub(crate) fn parse_or(value: Option<&str>, fallback: SortDirection) -> SortDirection {
		value.and_then(|v| v.parse().ok()).unwrap_or(fallback)
	}
}

impl Default for SortDirection {
	fn default() -> Self {
		SortDirection::Ascending
	}
}

impl fmt::Display for SortDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SortDirection {
	type Err = TableError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"asc" => Ok(SortDirection::Ascending),
			"desc" => Ok(SortDirection::Descending),
			_ => Err(TableError::InvalidDirection(s.to_string())),
		}
	}
}
