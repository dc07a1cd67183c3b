use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

/// The most recently received response body, kept exactly as parsed.
///
/// Nothing about the shape is checked. A body that is not a JSON array simply
/// has no items.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultList(Value);

impl Default for ResultList {
	fn default() -> Self {
		Self(Value::Array(Vec::new()))
	}
}

impl From<Value> for ResultList {
	fn from(value: Value) -> Self {
		Self(value)
	}
}

impl ResultList {
	/// Borrow the raw response body.
	pub fn as_value(&self) -> &Value {
		&self.0
	}

	pub fn into_value(self) -> Value {
		self.0
	}

	pub fn len(&self) -> usize {
		self.0.as_array().map_or(0, Vec::len)
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Iterate the entries in service order.
	pub fn items(&self) -> impl Iterator<Item = ResultItem<'_>> {
		self.0
			.as_array()
			.into_iter()
			.flatten()
			.map(ResultItem)
	}

	pub fn get(&self, index: usize) -> Option<ResultItem<'_>> {
		self.0.as_array()?.get(index).map(ResultItem)
	}

	/// Lazily project every entry into a displayable link.
	pub fn links(&self) -> impl Iterator<Item = ResultLink> + '_ {
		self.items()
			.enumerate()
			.map(|(index, item)| item.to_link(index))
	}
}

/// Borrowed view over one entry of a [`ResultList`].
#[derive(Debug, Clone, Copy)]
pub struct ResultItem<'a>(&'a Value);

impl<'a> ResultItem<'a> {
	pub fn title(&self) -> Cow<'a, str> {
		field_text(self.0.get("title"))
	}

	pub fn url(&self) -> Cow<'a, str> {
		field_text(self.0.get("url"))
	}

	pub(crate) fn to_link(self, index: usize) -> ResultLink {
		ResultLink {
			index,
			title: self.title().into_owned(),
			url: self.url().into_owned(),
		}
	}
}

/// One rendered entry: link text plus target. `index` is the position in the
/// current list and carries no meaning beyond it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultLink {
	#[serde(skip)]
	pub index: usize,
	pub title: String,
	pub url: String,
}

/// Missing and `null` fields become empty text; strings pass through; any
/// other JSON value is shown as its JSON text.
fn field_text(value: Option<&Value>) -> Cow<'_, str> {
	match value {
		None | Some(Value::Null) => Cow::Borrowed(""),
		Some(Value::String(text)) => Cow::Borrowed(text.as_str()),
		Some(other) => Cow::Owned(other.to_string()),
	}
}
