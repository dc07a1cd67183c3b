use std::any::Any;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use serde_json::Value;

use super::{SearchBackend, SearchError, SearchRequest};

/// Outcome of one search exchange, delivered back to the UI thread.
#[derive(Debug)]
pub(crate) struct SearchResponse {
	/// Identifier assigned when the request was issued.
	pub id: u64,
	pub query: String,
	pub outcome: Result<Value, SearchError>,
}

/// Run a single search on its own thread and post the outcome to `results`.
///
/// Each request gets an independent thread; nothing here orders or cancels
/// overlapping requests.
pub(crate) fn spawn_search(
	backend: Arc<dyn SearchBackend>,
	id: u64,
	request: SearchRequest,
	results: Sender<SearchResponse>,
) -> io::Result<JoinHandle<()>> {
	thread::Builder::new()
		.name(format!("srch-request-{id}"))
		.spawn(move || {
			let outcome = panic::catch_unwind(AssertUnwindSafe(|| backend.search(&request)))
				.unwrap_or_else(|payload| Err(SearchError::Panicked(panic_message(payload))));
			let response = SearchResponse {
				id,
				query: request.query,
				outcome,
			};
			// The receiver is gone once the UI has shut down.
			let _ = results.send(response);
		})
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
	if let Some(message) = payload.downcast_ref::<&str>() {
		(*message).to_string()
	} else if let Some(message) = payload.downcast_ref::<String>() {
		message.clone()
	} else {
		"unknown panic".to_string()
	}
}
