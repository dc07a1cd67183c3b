use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of a single search exchange.
#[derive(Debug, Error)]
pub enum SearchError {
	/// The service answered with a status outside the 2xx range.
	#[error("network response was not ok (status {status})")]
	Status { status: StatusCode },
	/// The request could not be sent or the response body could not be read.
	#[error("search request failed: {0}")]
	Transport(#[from] reqwest::Error),
	/// The response body was not valid JSON.
	#[error("search response was not valid JSON: {0}")]
	Decode(#[from] serde_json::Error),
	/// The backend panicked before producing an outcome.
	#[error("search worker panicked: {0}")]
	Panicked(String),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_error_message_names_the_status() {
		let err = SearchError::Status {
			status: StatusCode::INTERNAL_SERVER_ERROR,
		};
		let message = err.to_string();
		assert!(message.starts_with("network response was not ok"));
		assert!(message.contains("500"));
	}

	#[test]
	fn decode_errors_convert_from_serde() {
		let parse = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
		let err: SearchError = parse.into();
		assert!(matches!(err, SearchError::Decode(_)));
	}
}
