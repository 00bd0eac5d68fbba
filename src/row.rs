//! Named-field access on table rows

use std::collections::{BTreeMap, HashMap};

/// Read-only, named-field access to one table row
///
/// Columns without a renderer fall back to looking their field up on the row
/// directly; this trait is that lookup. `None` means the row has no such
/// field and the cell renders empty.
pub trait Row {
	/// Returns the display value of `field`, if the row has one
	fn value(&self, field: &str) -> Option<String>;
}

impl Row for HashMap<String, String> {
	fn value(&self, field: &str) -> Option<String> {
		self.get(field).cloned()
	}
}

impl Row for BTreeMap<String, String> {
	fn value(&self, field: &str) -> Option<String> {
		self.get(field).cloned()
	}
}

impl Row for serde_json::Value {
	fn value(&self, field: &str) -> Option<String> {
		match self.get(field)? {
			serde_json::Value::Null => None,
			// Strings display without surrounding quotes
			serde_json::Value::String(s) => Some(s.clone()),
			other => Some(other.to_string()),
		}
	}
}
