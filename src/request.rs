//! Read-only view of the current request's route and query string
//!
//! Sort state lives entirely in the URL, so every sort decision takes an
//! explicit [`RequestContext`] instead of consulting ambient request globals.

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Characters escaped when percent-encoding a query key or value
///
/// `&`, `=` and `+` are escaped so values containing them survive a later
/// first-`=` parse; the rest are unsafe in URLs generally. Only applied to
/// components entering the context unencoded, never to wire-format pairs.
const QUERY_ESCAPE: &AsciiSet = &CONTROLS
	.add(b' ')
	.add(b'"')
	.add(b'#')
	.add(b'<')
	.add(b'>')
	.add(b'%')
	.add(b'&')
	.add(b'=')
	.add(b'+');

/// The current request's route path and query parameters
///
/// Pairs are stored in wire format: values taken off the URI stay
/// percent-encoded and are decoded on read, never on store. Pairs keep their
/// order of appearance so rebuilt URLs stay stable across round trips.
/// Duplicate keys are kept; lookups return the first occurrence.
///
/// # Examples
///
/// ```
/// use webgrid::RequestContext;
///
/// let ctx = RequestContext::from_uri("/games?page=2&sort=name");
/// assert_eq!(ctx.path(), "/games");
/// assert_eq!(ctx.query_param("sort"), Some("name"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
	path: String,
	query: Vec<(String, String)>,
}

impl RequestContext {
	/// Creates a context for a path with no query parameters
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			query: Vec::new(),
		}
	}

	/// Parses a context out of a `path?query` URI string
	///
	/// Pairs are split on the first `=` only, so `=` inside values (Base64
	/// tokens and the like) is preserved. A pair without `=` becomes a key
	/// with an empty value.
	pub fn from_uri(uri: &str) -> Self {
		let (path, query) = match uri.split_once('?') {
			Some((p, q)) => (p, q),
			None => (uri, ""),
		};

		let query = query
			.split('&')
			.filter(|pair| !pair.is_empty())
			.map(|pair| match pair.split_once('=') {
				Some((k, v)) => (k.to_string(), v.to_string()),
				None => (pair.to_string(), String::new()),
			})
			.collect();

		Self {
			path: path.to_string(),
			query,
		}
	}

	/// Appends a query parameter, builder style
	///
	/// The key and value are given unencoded; they are percent-encoded on
	/// insertion so the stored pair is in wire format like every other.
	pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.push((
			Self::encode_component(&key.into()),
			Self::encode_component(&value.into()),
		));
		self
	}

	/// Returns the route path
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Returns the raw value of the first query parameter named `key`
	pub fn query_param(&self, key: &str) -> Option<&str> {
		self.query
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	/// Returns the percent-decoded value of the first query parameter named `key`
	pub fn decoded_query_param(&self, key: &str) -> Option<String> {
		self.query_param(key)
			.map(|v| percent_decode_str(v).decode_utf8_lossy().into_owned())
	}

	/// Returns all query pairs in order of appearance
	pub fn query_pairs(&self) -> &[(String, String)] {
		&self.query
	}

	/// Rebuilds a `path?query` URL from this context
	///
	/// Existing pairs keep their order, minus any whose key appears in
	/// `drop`; the `replace` pairs are appended at the end. Existing pairs
	/// are already in wire format and are emitted verbatim, so an encoded
	/// value survives any number of rebuild round trips; only the `replace`
	/// pairs are percent-encoded here.
	pub fn build_url(&self, replace: &[(&str, &str)], drop: &[&str]) -> String {
		let mut parts: Vec<String> = self
			.query
			.iter()
			.filter(|(k, _)| !drop.contains(&k.as_str()))
			.map(|(k, v)| format!("{}={}", k, v))
			.collect();
		parts.extend(
			replace.iter().map(|(k, v)| {
				format!("{}={}", Self::encode_component(k), Self::encode_component(v))
			}),
		);

		if parts.is_empty() {
			self.path.clone()
		} else {
			format!("{}?{}", self.path, parts.join("&"))
		}
	}

	fn encode_component(s: &str) -> String {
		utf8_percent_encode(s, QUERY_ESCAPE).to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_from_uri_splits_path_and_query() {
		let ctx = RequestContext::from_uri("/games?page=2&sort=name");

		assert_eq!(ctx.path(), "/games");
		assert_eq!(ctx.query_param("page"), Some("2"));
		assert_eq!(ctx.query_param("sort"), Some("name"));
	}

	#[rstest]
	fn test_from_uri_without_query() {
		let ctx = RequestContext::from_uri("/games");

		assert_eq!(ctx.path(), "/games");
		assert!(ctx.query_pairs().is_empty());
	}

	#[rstest]
	fn test_from_uri_preserves_equals_in_value() {
		let ctx = RequestContext::from_uri("/t?token=abc==&formula=a=b=c");

		assert_eq!(ctx.query_param("token"), Some("abc=="));
		assert_eq!(ctx.query_param("formula"), Some("a=b=c"));
	}

	#[rstest]
	fn test_from_uri_key_without_value() {
		let ctx = RequestContext::from_uri("/t?flag");

		assert_eq!(ctx.query_param("flag"), Some(""));
	}

	#[rstest]
	fn test_query_param_returns_first_duplicate() {
		let ctx = RequestContext::from_uri("/t?tag=a&tag=b");

		assert_eq!(ctx.query_param("tag"), Some("a"));
	}

	#[rstest]
	fn test_decoded_query_param() {
		let ctx = RequestContext::from_uri("/t?name=John%20Doe");

		assert_eq!(ctx.decoded_query_param("name"), Some("John Doe".to_string()));
	}

	#[rstest]
	fn test_build_url_preserves_order_and_drops_keys() {
		let ctx = RequestContext::from_uri("/games?page=2&filter=indie&sort=name&dir=asc");

		let url = ctx.build_url(&[("sort", "title"), ("dir", "desc")], &["sort", "dir"]);

		assert_eq!(url, "/games?page=2&filter=indie&sort=title&dir=desc");
	}

	#[rstest]
	fn test_build_url_without_query() {
		let ctx = RequestContext::new("/games");

		assert_eq!(ctx.build_url(&[], &[]), "/games");
	}

	#[rstest]
	fn test_build_url_encodes_values() {
		let ctx = RequestContext::new("/t").with_param("q", "a&b=c");

		assert_eq!(ctx.build_url(&[], &[]), "/t?q=a%26b%3Dc");
	}

	#[rstest]
	fn test_build_url_keeps_encoded_values_verbatim() {
		let ctx = RequestContext::from_uri("/t?q=a%20b&page=2");

		let url = ctx.build_url(&[("dir", "asc")], &["dir"]);

		assert_eq!(url, "/t?q=a%20b&page=2&dir=asc");
	}

	#[rstest]
	fn test_build_url_is_stable_over_repeated_rebuilds() {
		// An encoded value must come through unchanged no matter how many
		// times the produced URL is parsed and rebuilt.
		let mut url = "/t?q=a%20b".to_string();
		for _ in 0..3 {
			url = RequestContext::from_uri(&url).build_url(&[("dir", "asc")], &["dir"]);
		}

		assert_eq!(url, "/t?q=a%20b&dir=asc");
	}

	#[rstest]
	fn test_build_url_round_trips_through_from_uri() {
		let ctx = RequestContext::from_uri("/t?a=1&b=2");
		let rebuilt = RequestContext::from_uri(&ctx.build_url(&[("c", "3")], &[]));

		assert_eq!(rebuilt.query_param("a"), Some("1"));
		assert_eq!(rebuilt.query_param("c"), Some("3"));
	}
}
