
use fixtures::{Game, sample_games};
use rstest::*;
use webgrid::{Column, ColumnSpec, RequestContext, SortDirection, Table, TableConfig};

#[fixture]
fn name_column() -> Column<Game> {
	Column::from_spec(ColumnSpec::field("name"), SortDirection::Ascending).unwrap()
}

#[rstest]
fn test_is_sorted_iff_query_names_the_field(name_column: Column<Game>) {
	let config = TableConfig::default();

	assert!(name_column.is_sorted(&RequestContext::from_uri("/g?sort=name"), &config, None));
	assert!(!name_column.is_sorted(&RequestContext::from_uri("/g?sort=price"), &config, None));
	assert!(!name_column.is_sorted(&RequestContext::from_uri("/g"), &config, None));
}

#[rstest]
fn test_is_sorted_via_default_sort_field(name_column: Column<Game>) {
	let config = TableConfig::default();

	assert!(name_column.is_sorted(&RequestContext::from_uri("/g"), &config, Some("name")));
	assert!(!name_column.is_sorted(
		&RequestContext::from_uri("/g?sort=price"),
		&config,
		Some("name")
	));
}

#[rstest]
fn test_sort_url_alternates_over_repeated_requests(name_column: Column<Game>) {
	// Feed each generated URL back in as the next request: the direction
	// must alternate asc -> desc -> asc.
	let config = TableConfig::default();
	let first = RequestContext::from_uri("/g?sort=name&dir=asc");

	let url1 = name_column.sort_url(&first, &config, None, None);
	assert_eq!(url1, "/g?sort=name&dir=desc");

	let url2 = name_column.sort_url(&RequestContext::from_uri(&url1), &config, None, None);
	assert_eq!(url2, "/g?sort=name&dir=asc");

	let url3 = name_column.sort_url(&RequestContext::from_uri(&url2), &config, None, None);
	assert_eq!(url3, url1);
}

#[rstest]
fn test_sort_url_preserves_encoded_query_values(name_column: Column<Game>) {
	let config = TableConfig::default();
	let ctx = RequestContext::from_uri("/g?q=a%20b&sort=name&dir=asc");

	let url = name_column.sort_url(&ctx, &config, None, None);

	assert_eq!(url, "/g?q=a%20b&sort=name&dir=desc");
}

#[rstest]
fn test_sort_url_does_not_grow_on_repeated_toggles(name_column: Column<Game>) {
	// An already-encoded value must not be re-encoded on each toggle when
	// every produced URL becomes the next request.
	let config = TableConfig::default();
	let mut url = "/g?q=a%20b&sort=name&dir=asc".to_string();

	for _ in 0..4 {
		url = name_column.sort_url(&RequestContext::from_uri(&url), &config, None, None);
		assert!(url.starts_with("/g?q=a%20b&sort=name&dir="));
	}
	assert_eq!(url, "/g?q=a%20b&sort=name&dir=asc");
}

#[rstest]
fn test_sort_url_from_unsorted_state_uses_column_default(name_column: Column<Game>) {
	let config = TableConfig::default();

	let url = name_column.sort_url(&RequestContext::from_uri("/g"), &config, None, None);

	assert_eq!(url, "/g?sort=name&dir=asc");
}

#[rstest]
fn test_sort_url_toggles_default_sorted_column(name_column: Column<Game>) {
	// No sort parameter, but the column is the declared default sort: it is
	// displayed ascending, so its link must point at descending.
	let config = TableConfig::default();

	let url = name_column.sort_url(&RequestContext::from_uri("/g"), &config, Some("name"), None);

	assert_eq!(url, "/g?sort=name&dir=desc");
}

#[rstest]
fn test_sort_url_keeps_unrelated_query_parameters(name_column: Column<Game>) {
	let config = TableConfig::default();
	let ctx = RequestContext::from_uri("/g?page=2&q=terra&sort=price&dir=desc");

	let url = name_column.sort_url(&ctx, &config, None, None);

	assert_eq!(url, "/g?page=2&q=terra&sort=name&dir=asc");
}

#[rstest]
fn test_custom_query_key_names(name_column: Column<Game>) {
	let config = TableConfig::default()
		.sort_field_key("order_by")
		.sort_dir_key("order_dir");
	let ctx = RequestContext::from_uri("/g?order_by=name&order_dir=asc");

	assert!(name_column.is_sorted(&ctx, &config, None));
	assert_eq!(
		name_column.sort_url(&ctx, &config, None, None),
		"/g?order_by=name&order_dir=desc"
	);
}

#[rstest]
fn test_header_marks_sorted_column(sample_games: Vec<Game>) {
	let mut table = Table::with_rows(sample_games);
	table.add_column(ColumnSpec::labeled("name", "Name")).unwrap();
	table.add_column(ColumnSpec::labeled("price", "Price")).unwrap();

	let header = table.render_header(&RequestContext::from_uri("/g?sort=name&dir=desc"));

	assert!(header.contains("class=\"sorted desc\""));
	// The unsorted column carries no sort marker
	assert!(!header.contains("class=\"sorted asc\""));
}

#[rstest]
fn test_header_links_escape_ampersands(sample_games: Vec<Game>) {
	let mut table = Table::with_rows(sample_games);
	table.add_column(ColumnSpec::labeled("name", "Name")).unwrap();

	let header = table.render_header(&RequestContext::from_uri("/g?page=2"));

	assert!(header.contains("href=\"/g?page=2&amp;sort=name&amp;dir=asc\""));
}

#[rstest]
fn test_table_config_default_direction_applies_to_columns(sample_games: Vec<Game>) {
	let mut table = Table::with_rows(sample_games)
		.config(TableConfig::default().default_direction(SortDirection::Descending));
	table.add_column(ColumnSpec::field("name")).unwrap();

	assert_eq!(
		table.columns()[0].default_direction(),
		SortDirection::Descending
	);

	let header = table.render_header(&RequestContext::new("/g"));
	assert!(header.contains("dir=desc"));
}
