use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use crate::search::{SearchBackend, SearchRequest, SearchResponse, spawn_search};

/// Bookkeeping for searches issued from the UI thread.
///
/// Requests run concurrently and their responses are handed back in arrival
/// order. No response is ever discarded for being stale.
pub(crate) struct SearchRuntime {
	backend: Arc<dyn SearchBackend>,
	tx: Sender<SearchResponse>,
	rx: Receiver<SearchResponse>,
	next_request_id: u64,
	in_flight: usize,
	last_applied_id: Option<u64>,
}

impl SearchRuntime {
	pub(crate) fn new(backend: Arc<dyn SearchBackend>) -> Self {
		let (tx, rx) = mpsc::channel();
		Self {
			backend,
			tx,
			rx,
			next_request_id: 0,
			in_flight: 0,
			last_applied_id: None,
		}
	}

	/// Start a request on its own worker thread and return its id.
	pub(crate) fn issue(&mut self, request: SearchRequest) -> Option<u64> {
		self.next_request_id = self.next_request_id.saturating_add(1);
		let id = self.next_request_id;
		match spawn_search(Arc::clone(&self.backend), id, request, self.tx.clone()) {
			Ok(_) => {
				self.in_flight += 1;
				Some(id)
			}
			Err(err) => {
				log::error!("failed to start search request {id}: {err}");
				None
			}
		}
	}

	pub(crate) fn try_recv(&mut self) -> Option<SearchResponse> {
		match self.rx.try_recv() {
			Ok(response) => {
				self.in_flight = self.in_flight.saturating_sub(1);
				Some(response)
			}
			Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
		}
	}

	/// Record that `id` replaced the visible results. Returns `true` when a
	/// newer request had already been applied.
	pub(crate) fn record_applied(&mut self, id: u64) -> bool {
		let overtaken = self.last_applied_id.is_some_and(|last| last > id);
		self.last_applied_id = Some(id);
		overtaken
	}

	pub(crate) fn in_flight(&self) -> usize {
		self.in_flight
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight > 0
	}

	#[cfg(test)]
	pub(crate) fn recv_timeout(&mut self, timeout: std::time::Duration) -> Option<SearchResponse> {
		let response = self.rx.recv_timeout(timeout).ok()?;
		self.in_flight = self.in_flight.saturating_sub(1);
		Some(response)
	}

	#[cfg(test)]
	pub(crate) fn sender(&self) -> Sender<SearchResponse> {
		self.tx.clone()
	}
}
