use serde::Serialize;

/// Endpoint used when no `search.endpoint` is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/search";

/// JSON body posted to the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
	pub query: String,
}

impl SearchRequest {
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn body_serializes_as_single_query_field() {
		let body = serde_json::to_string(&SearchRequest::new("foo")).unwrap();
		assert_eq!(body, r#"{"query":"foo"}"#);
	}

	#[test]
	fn empty_and_padded_queries_are_sent_verbatim() {
		let empty = serde_json::to_string(&SearchRequest::new("")).unwrap();
		assert_eq!(empty, r#"{"query":""}"#);

		let padded = serde_json::to_string(&SearchRequest::new("  react hooks ")).unwrap();
		assert_eq!(padded, r#"{"query":"  react hooks "}"#);
	}
}
