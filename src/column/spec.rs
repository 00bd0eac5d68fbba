//! Declarative column configuration

use super::base::Renderer;
use crate::sort::SortDirection;
use serde::Deserialize;

/// Optional column settings
///
/// Every setting falls back to a table-level or built-in default when absent,
/// so the struct deserializes from partial configuration mappings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ColumnOptions {
	/// Row field the column displays; required when the options mapping is
	/// the only configuration given
	pub field: Option<String>,
	/// Header label; defaults to the field name
	pub label: Option<String>,
	/// Direction used the first time the column is sorted
	pub direction: Option<SortDirection>,
	/// Whether the header renders a sort link; defaults to true
	pub sortable: Option<bool>,
	/// CSS classes applied to the column's cells
	pub css_classes: Option<String>,
}

/// The recognized ways to configure a column
///
/// One variant per accepted argument shape, so an unrepresentable
/// combination cannot be constructed. The one shape that can still go wrong,
/// an options mapping naming no field, fails with
/// [`TableError::MissingField`](crate::TableError::MissingField) when the
/// column is built.
pub enum ColumnSpec<R> {
	/// A lone field name
	Field(String),
	/// Field name and header label
	FieldLabel(String, String),
	/// A lone options mapping; must name a field
	Options(ColumnOptions),
	/// Field name plus an options mapping; the explicit field name wins over
	/// any field the mapping carries
	FieldOptions(String, ColumnOptions),
	/// Field name, header label, and a cell renderer
	FieldLabelRenderer(String, String, Renderer<R>),
}

impl<R> ColumnSpec<R> {
	/// Shorthand for [`ColumnSpec::Field`]
	pub fn field(name: impl Into<String>) -> Self {
		ColumnSpec::Field(name.into())
	}

	/// Shorthand for [`ColumnSpec::FieldLabel`]
	pub fn labeled(name: impl Into<String>, label: impl Into<String>) -> Self {
		ColumnSpec::FieldLabel(name.into(), label.into())
	}

	/// Shorthand for [`ColumnSpec::FieldLabelRenderer`]
	pub fn rendered(
		name: impl Into<String>,
		label: impl Into<String>,
		renderer: impl Fn(&R) -> String + Send + Sync + 'static,
	) -> Self {
		ColumnSpec::FieldLabelRenderer(name.into(), label.into(), Box::new(renderer))
	}
}

impl<R> std::fmt::Debug for ColumnSpec<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ColumnSpec::Field(name) => f.debug_tuple("Field").field(name).finish(),
			ColumnSpec::FieldLabel(name, label) => {
				f.debug_tuple("FieldLabel").field(name).field(label).finish()
			}
			ColumnSpec::Options(opts) => f.debug_tuple("Options").field(opts).finish(),
			ColumnSpec::FieldOptions(name, opts) => {
				f.debug_tuple("FieldOptions").field(name).field(opts).finish()
			}
			ColumnSpec::FieldLabelRenderer(name, label, _) => f
				.debug_tuple("FieldLabelRenderer")
				.field(name)
				.field(label)
				.finish(),
		}
	}
}
