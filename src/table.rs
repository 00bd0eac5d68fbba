//! Table aggregation and HTML rendering

use crate::column::{Column, ColumnSpec};
use crate::config::TableConfig;
use crate::error::{Result, TableError};
use crate::html::{escape_attr, escape_html};
use crate::request::RequestContext;
use crate::row::Row;
use crate::sort::SortDirection;

/// A renderable collection of rows and columns
///
/// The table owns its rows, its columns, the [`TableConfig`] naming the sort
/// query keys, and the declared default sort field. Rendering takes the
/// current [`RequestContext`] so that header links and row ordering follow
/// the request's sort state.
///
/// # Examples
///
/// ```
/// use webgrid::{ColumnSpec, RequestContext, Table};
/// use std::collections::HashMap;
///
/// let rows = vec![HashMap::from([("name".to_string(), "Terraria".to_string())])];
/// let mut table = Table::with_rows(rows);
/// table
///     .add_column(ColumnSpec::labeled("name", "Custom Column Name"))
///     .unwrap();
///
/// let html = table.render(&RequestContext::new("/games"));
/// assert!(html.contains("Custom Column Name"));
/// assert!(html.contains("Terraria"));
/// ```
pub struct Table<R> {
	config: TableConfig,
	columns: Vec<Column<R>>,
	rows: Vec<R>,
	default_sort: Option<String>,
}

impl<R> Table<R> {
	/// Creates an empty table with the default configuration
	pub fn new() -> Self {
		Self::with_config(TableConfig::default())
	}

	/// Creates an empty table with an explicit configuration
	pub fn with_config(config: TableConfig) -> Self {
		Self {
			config,
			columns: Vec::new(),
			rows: Vec::new(),
			default_sort: None,
		}
	}

	/// Creates a table over `rows` with the default configuration
	pub fn with_rows(rows: Vec<R>) -> Self {
		let mut table = Self::new();
		table.rows = rows;
		table
	}

	/// Replaces the table configuration, builder style
	pub fn config(mut self, config: TableConfig) -> Self {
		self.config = config;
		self
	}

	/// Registers a column built from `spec`
	///
	/// # Errors
	///
	/// [`TableError::MissingField`] when an options-only spec names no field.
	pub fn add_column(&mut self, spec: ColumnSpec<R>) -> Result<()> {
		let column = Column::from_spec(spec, self.config.default_direction)?;
		tracing::debug!(field = %column.field(), "registered column");
		self.columns.push(column);
		Ok(())
	}

	/// Returns the registered columns in registration order
	pub fn columns(&self) -> &[Column<R>] {
		&self.columns
	}

	/// Returns the column displaying `field`, if registered
	pub fn column(&self, field: &str) -> Option<&Column<R>> {
		self.columns.iter().find(|c| c.field() == field)
	}

	/// Returns the table's rows in insertion order
	pub fn rows(&self) -> &[R] {
		&self.rows
	}

	/// Returns the number of rows
	pub fn total_rows(&self) -> usize {
		self.rows.len()
	}

	/// Declares the field sorted when the request carries no sort parameter
	///
	/// # Errors
	///
	/// [`TableError::UnknownColumn`] when no column displays `field`,
	/// [`TableError::NotSortable`] when that column is not sortable.
	pub fn default_sort(&mut self, field: &str) -> Result<()> {
		let column = self
			.column(field)
			.ok_or_else(|| TableError::UnknownColumn(field.to_string()))?;
		if !column.is_sortable() {
			return Err(TableError::NotSortable(field.to_string()));
		}
		self.default_sort = Some(field.to_string());
		Ok(())
	}

	/// Returns the declared default sort field
	pub fn default_sort_field(&self) -> Option<&str> {
		self.default_sort.as_deref()
	}

	/// Installs a cell renderer on the column displaying `field`
	///
	/// # Errors
	///
	/// [`TableError::UnknownColumn`] when no column displays `field`.
	pub fn set_renderer(
		&mut self,
		field: &str,
		renderer: impl Fn(&R) -> String + Send + Sync + 'static,
	) -> Result<()> {
		let column = self
			.columns
			.iter_mut()
			.find(|c| c.field() == field)
			.ok_or_else(|| TableError::UnknownColumn(field.to_string()))?;
		column.set_renderer(renderer);
		Ok(())
	}

	/// Returns the sortable column the request currently sorts by, if any
	///
	/// A query string naming an unknown or non-sortable column matches
	/// nothing: the query string is caller controlled, so it degrades to the
	/// unsorted order instead of erroring.
	fn sorted_column(&self, ctx: &RequestContext) -> Option<&Column<R>> {
		self.columns
			.iter()
			.filter(|c| c.is_sortable())
			.find(|c| c.is_sorted(ctx, &self.config, self.default_sort.as_deref()))
	}
}

impl<R: Row> Table<R> {
	/// Returns the rows ordered per the request's sort state
	///
	/// Rows are compared by the sorted column's displayed cell value; the
	/// sort is stable, so ties keep insertion order. An unsorted request
	/// yields insertion order.
	pub fn ordered_rows(&self, ctx: &RequestContext) -> Vec<&R> {
		let mut rows: Vec<&R> = self.rows.iter().collect();
		let Some(column) = self.sorted_column(ctx) else {
			return rows;
		};
		let direction = column.current_direction(ctx, &self.config, self.default_sort.as_deref());
		tracing::debug!(field = %column.field(), direction = %direction, "ordering rows");

		rows.sort_by_key(|row| self.cell_value(column, row));
		if direction == SortDirection::Descending {
			rows.reverse();
		}
		rows
	}

	/// Renders the table header row, with sort links on sortable columns
	///
	/// The currently sorted column's header carries `sorted asc` or
	/// `sorted desc` classes alongside any configured CSS classes.
	pub fn render_header(&self, ctx: &RequestContext) -> String {
		let default_sort = self.default_sort.as_deref();
		let mut out = String::from("<tr>");
		for column in &self.columns {
			let mut classes: Vec<String> = Vec::new();
			if !column.classes().is_empty() {
				classes.push(column.classes().to_string());
			}
			if column.is_sortable() && column.is_sorted(ctx, &self.config, default_sort) {
				classes.push("sorted".to_string());
				classes.push(
					column
						.current_direction(ctx, &self.config, default_sort)
						.as_str()
						.to_string(),
				);
			}
			let class_attr = if classes.is_empty() {
				String::new()
			} else {
				format!(" class=\"{}\"", escape_attr(&classes.join(" ")))
			};

			if column.is_sortable() {
				let url = column.sort_url(ctx, &self.config, default_sort, None);
				out.push_str(&format!(
					"<th{}><a href=\"{}\">{}</a></th>",
					class_attr,
					escape_attr(&url),
					escape_html(column.header())
				));
			} else {
				out.push_str(&format!(
					"<th{}>{}</th>",
					class_attr,
					escape_html(column.header())
				));
			}
		}
		out.push_str("</tr>");
		out
	}

	/// Renders one body row
	///
	/// Renderer output is inserted verbatim (renderers emit markup); the
	/// field-access fallback is HTML-escaped. A row lacking the field renders
	/// an empty cell.
	pub fn render_row(&self, row: &R) -> String {
		let mut out = String::from("<tr>");
		for column in &self.columns {
			let class_attr = if column.classes().is_empty() {
				String::new()
			} else {
				format!(" class=\"{}\"", escape_attr(column.classes()))
			};
			let cell = match column.render(row) {
				Some(markup) => markup,
				None => row.value(column.field()).map(|v| escape_html(&v)).unwrap_or_default(),
			};
			out.push_str(&format!("<td{}>{}</td>", class_attr, cell));
		}
		out.push_str("</tr>");
		out
	}

	/// Renders the whole table as HTML
	pub fn render(&self, ctx: &RequestContext) -> String {
		let mut out = String::from("<table>\n<thead>\n");
		out.push_str(&self.render_header(ctx));
		out.push_str("\n</thead>\n<tbody>\n");
		for row in self.ordered_rows(ctx) {
			out.push_str(&self.render_row(row));
			out.push('\n');
		}
		out.push_str("</tbody>\n</table>");
		out
	}

	/// The displayed value of one cell, used for both rendering and ordering
	fn cell_value(&self, column: &Column<R>, row: &R) -> String {
		column
			.render(row)
			.or_else(|| row.value(column.field()))
			.unwrap_or_default()
	}
}

impl<R> Default for Table<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R> std::fmt::Debug for Table<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Table")
			.field("config", &self.config)
			.field("columns", &self.columns)
			.field("total_rows", &self.rows.len())
			.field("default_sort", &self.default_sort)
			.finish()
	}
}
