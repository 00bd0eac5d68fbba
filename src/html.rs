//! HTML escaping for rendered table markup
//!
//! Column labels and fallback cell values are user or database provided and
//! must not reach the page unescaped.
//!
//! Escaped characters:
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `&` → `&amp;`
//! - `"` → `&quot;`
//! - `'` → `&#x27;`

/// Escape HTML special characters in text content
///
/// # Examples
///
/// ```
/// use webgrid::html::escape_html;
///
/// assert_eq!(escape_html("<b>bold</b>"), "&lt;b&gt;bold&lt;/b&gt;");
/// assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
/// ```
pub fn escape_html(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	for c in s.chars() {
		match c {
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'&' => out.push_str("&amp;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#x27;"),
			_ => out.push(c),
		}
	}
	out
}

/// Escape a string for use inside a double-quoted HTML attribute
///
/// Same character set as [`escape_html`]; kept separate so call sites state
/// which position they escape for.
pub fn escape_attr(s: &str) -> String {
	escape_html(s)
}
