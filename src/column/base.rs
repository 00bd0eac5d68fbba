//! The column type and its sort-state queries

use super::spec::{ColumnOptions, ColumnSpec};
use crate::config::TableConfig;
use crate::error::{Result, TableError};
use crate::request::RequestContext;
use crate::sort::SortDirection;

/// A cell renderer: maps a row to an HTML fragment
pub type Renderer<R> = Box<dyn Fn(&R) -> String + Send + Sync>;

/// One renderable, optionally sortable field of a tabular view
///
/// Sort state is never stored on the column: [`Column::is_sorted`],
/// [`Column::current_direction`] and [`Column::sort_url`] are pure functions
/// of the current [`RequestContext`], the table's [`TableConfig`], and the
/// table's declared default sort field.
///
/// # Examples
///
/// ```
/// use webgrid::{Column, ColumnSpec, RequestContext, TableConfig};
///
/// struct Game {
///     name: String,
/// }
///
/// let column: Column<Game> = Column::from_spec(
///     ColumnSpec::rendered("name", "Name", |g: &Game| format!("<em>{}</em>", g.name)),
///     Default::default(),
/// )
/// .unwrap();
///
/// let ctx = RequestContext::from_uri("/games?sort=name&dir=asc");
/// let config = TableConfig::default();
/// assert!(column.is_sorted(&ctx, &config, None));
/// assert_eq!(column.sort_url(&ctx, &config, None, None), "/games?sort=name&dir=desc");
/// ```
pub struct Column<R> {
	field: String,
	label: String,
	direction: SortDirection,
	sortable: bool,
	css_classes: String,
	renderer: Option<Renderer<R>>,
}

impl<R> Column<R> {
	/// Creates a sortable column displaying `field` with the field name as label
	pub fn new(field: impl Into<String>) -> Self {
		let field = field.into();
		Self {
			label: field.clone(),
			field,
			direction: SortDirection::Ascending,
			sortable: true,
			css_classes: String::new(),
			renderer: None,
		}
	}

	/// Builds a column from a [`ColumnSpec`]
	///
	/// `fallback_direction` applies when the spec carries no direction of its
	/// own; tables pass their configured default here.
	///
	/// # Errors
	///
	/// [`TableError::MissingField`] when an options-only spec names no field.
	pub fn from_spec(spec: ColumnSpec<R>, fallback_direction: SortDirection) -> Result<Self> {
		// Options are applied after the fallback so an explicit direction in
		// the mapping always wins.
		match spec {
			ColumnSpec::Field(field) => Ok(Self::new(field).direction(fallback_direction)),
			ColumnSpec::FieldLabel(field, label) => {
				Ok(Self::new(field).label(label).direction(fallback_direction))
			}
			ColumnSpec::Options(opts) => {
				let field = opts.field.clone().ok_or(TableError::MissingField)?;
				Ok(Self::new(field).direction(fallback_direction).apply_options(opts))
			}
			ColumnSpec::FieldOptions(field, opts) => {
				Ok(Self::new(field).direction(fallback_direction).apply_options(opts))
			}
			ColumnSpec::FieldLabelRenderer(field, label, renderer) => {
				let mut column = Self::new(field).label(label).direction(fallback_direction);
				column.renderer = Some(renderer);
				Ok(column)
			}
		}
	}

	fn apply_options(mut self, opts: ColumnOptions) -> Self {
		if let Some(label) = opts.label {
			self.label = label;
		}
		if let Some(direction) = opts.direction {
			self.direction = direction;
		}
		if let Some(sortable) = opts.sortable {
			self.sortable = sortable;
		}
		if let Some(css_classes) = opts.css_classes {
			self.css_classes = css_classes;
		}
		self
	}

	/// Sets the header label, builder style
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}

	/// Sets whether the header renders a sort link, builder style
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Sets the column's own default sort direction, builder style
	pub fn direction(mut self, direction: SortDirection) -> Self {
		self.direction = direction;
		self
	}

	/// Sets CSS classes applied to the column's cells, builder style
	pub fn css_classes(mut self, css_classes: impl Into<String>) -> Self {
		self.css_classes = css_classes.into();
		self
	}

	/// Returns the row field this column displays
	pub fn field(&self) -> &str {
		&self.field
	}

	/// Returns the header label
	pub fn header(&self) -> &str {
		&self.label
	}

	/// Returns whether the header renders a sort link
	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	/// Returns the CSS classes applied to this column's cells
	pub fn classes(&self) -> &str {
		&self.css_classes
	}

	/// Returns the direction used the first time this column is sorted
	pub fn default_direction(&self) -> SortDirection {
		self.direction
	}

	/// Returns whether a cell renderer is configured
	pub fn has_renderer(&self) -> bool {
		self.renderer.is_some()
	}

	/// Installs a cell renderer, replacing any existing one
	pub fn set_renderer(&mut self, renderer: impl Fn(&R) -> String + Send + Sync + 'static) {
		self.renderer = Some(Box::new(renderer));
	}

	/// Renders one cell through the configured renderer
	///
	/// `None` means no renderer is configured and the caller should fall back
	/// to direct field access on the row.
	pub fn render(&self, row: &R) -> Option<String> {
		self.renderer.as_ref().map(|r| r(row))
	}

	/// Returns whether this column is the one currently sorted
	///
	/// True when the sort-field query parameter equals this column's field,
	/// or when that parameter is absent and this column's field is the
	/// table's declared default sort. The parameter is compared
	/// percent-decoded, so an encoded spelling of the field name still
	/// matches.
	pub fn is_sorted(
		&self,
		ctx: &RequestContext,
		config: &TableConfig,
		default_sort: Option<&str>,
	) -> bool {
		match ctx.decoded_query_param(&config.sort_field_key) {
			Some(current) => current == self.field,
			None => default_sort == Some(self.field.as_str()),
		}
	}

	/// Resolves the direction this column is currently displayed in
	///
	/// When sorted, the request's direction parameter decides; a missing or
	/// malformed value falls back to the column's default rather than
	/// failing, since the query string is caller controlled.
	pub fn current_direction(
		&self,
		ctx: &RequestContext,
		config: &TableConfig,
		default_sort: Option<&str>,
	) -> SortDirection {
		if self.is_sorted(ctx, config, default_sort) {
			SortDirection::parse_or(
				ctx.decoded_query_param(&config.sort_dir_key).as_deref(),
				self.direction,
			)
		} else {
			self.direction
		}
	}

	/// Builds the URL that sorts the table by this column
	///
	/// All query pairs of the current request are preserved except the
	/// sort-field/direction pair, which are replaced. An explicit `direction`
	/// wins; otherwise an already-sorted column toggles its current
	/// direction, and an unsorted one uses its default.
	pub fn sort_url(
		&self,
		ctx: &RequestContext,
		config: &TableConfig,
		default_sort: Option<&str>,
		direction: Option<SortDirection>,
	) -> String {
		let direction = match direction {
			Some(direction) => direction,
			None if self.is_sorted(ctx, config, default_sort) => {
				self.current_direction(ctx, config, default_sort).toggle()
			}
			None => self.direction,
		};
		tracing::debug!(field = %self.field, direction = %direction, "building sort url");
		ctx.build_url(
			&[
				(config.sort_field_key.as_str(), self.field.as_str()),
				(config.sort_dir_key.as_str(), direction.as_str()),
			],
			&[&config.sort_field_key, &config.sort_dir_key],
		)
	}
}

impl<R> std::fmt::Debug for Column<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Column")
			.field("field", &self.field)
			.field("label", &self.label)
			.field("direction", &self.direction)
			.field("sortable", &self.sortable)
			.field("css_classes", &self.css_classes)
			.field("has_renderer", &self.renderer.is_some())
			.finish()
	}
}
