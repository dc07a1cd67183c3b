use super::App;
use crate::search::{ResultList, SearchRequest, SearchResponse};

impl<'a> App<'a> {
	/// Send the current query to the search service.
	///
	/// The query is posted exactly as typed, including when it is empty.
	pub fn trigger_search(&mut self) -> Option<u64> {
		let request = SearchRequest::new(self.search_input.text());
		let id = self.search.issue(request)?;
		log::debug!("issued search {id} for {:?}", self.search_input.text());
		Some(id)
	}

	/// Drain any search responses waiting on the receiver channel.
	pub fn pump_search_results(&mut self) {
		while let Some(response) = self.search.try_recv() {
			self.handle_search_response(response);
		}
	}

	/// Apply one response. Successes replace the results wholesale; failures
	/// are logged and leave the current results in place.
	pub(crate) fn handle_search_response(&mut self, response: SearchResponse) {
		let SearchResponse { id, query, outcome } = response;
		match outcome {
			Ok(body) => {
				if self.search.record_applied(id) {
					log::debug!("search {id} arrived after a newer response and replaced it");
				}
				self.results = ResultList::from(body);
				self.list_state.select(None);
				self.ensure_selection();
				log::info!(
					"search {id} for {query:?} returned {} results",
					self.results.len()
				);
			}
			Err(err) => {
				log::error!("There was a problem with search {id} for {query:?}: {err}");
			}
		}
	}
}
