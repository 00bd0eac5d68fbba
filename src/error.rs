//! Error types for table configuration and rendering

/// Errors raised by table and column configuration
///
/// Malformed request input (unknown sort fields, garbage direction values in
/// the query string) never produces an error: the query string is caller
/// controlled and is handled leniently at read time. These variants cover
/// programming errors made while configuring a table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
	/// Column options carried no field name
	#[error("column configuration is missing a field name")]
	MissingField,

	/// An operation addressed a column the table does not have
	#[error("unknown column: {0}")]
	UnknownColumn(String),

	/// A sort was requested against a column configured as non-sortable
	#[error("column `{0}` is not sortable")]
	NotSortable(String),

	/// A sort-direction string was neither `asc` nor `desc`
	#[error("invalid sort direction: {0}")]
	InvalidDirection(String),
}

/// Result alias for table operations
pub type Result<T> = std::result::Result<T, TableError>;
