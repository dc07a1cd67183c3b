use std::sync::Arc;

use anyhow::Result;
use srch::{HttpBackend, ResultList, SearchBackend, SearchOutcome, SearchRequest, SearchUi};

use crate::settings::ResolvedConfig;

/// Coordinates building and running either the interactive client or a single
/// headless search.
pub(crate) struct SearchWorkflow {
	backend: Arc<dyn SearchBackend>,
	config: ResolvedConfig,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let backend = HttpBackend::new(config.endpoint_url()?)?;
		log::debug!("using search endpoint {}", backend.endpoint());
		Ok(Self::with_backend(Arc::new(backend), config))
	}

	pub(crate) fn with_backend(backend: Arc<dyn SearchBackend>, config: ResolvedConfig) -> Self {
		Self { backend, config }
	}

	pub(crate) fn run(self) -> Result<SearchOutcome> {
		SearchUiFactory::build(self.backend, self.config).run()
	}

	/// Run one search for the configured initial query without a terminal.
	pub(crate) fn run_once(self) -> Result<ResultList> {
		let request = SearchRequest::new(self.config.initial_query);
		match self.backend.search(&request) {
			Ok(body) => Ok(ResultList::from(body)),
			Err(err) => {
				log::error!("There was a problem with the search for {:?}: {err}", request.query);
				Err(err.into())
			}
		}
	}
}

/// Helper for translating resolved configuration into a configured `SearchUi`.
struct SearchUiFactory {
	search_ui: SearchUi,
}

impl SearchUiFactory {
	fn build(backend: Arc<dyn SearchBackend>, config: ResolvedConfig) -> SearchUi {
		let ResolvedConfig {
			endpoint: _,
			initial_query,
			theme,
			ui,
		} = config;

		Self::new(backend)
			.with_ui_config(ui)
			.with_initial_query(initial_query)
			.with_theme(&theme)
			.finish()
	}

	fn new(backend: Arc<dyn SearchBackend>) -> Self {
		Self {
			search_ui: SearchUi::with_backend(backend),
		}
	}

	fn with_ui_config(mut self, config: srch::UiConfig) -> Self {
		self.search_ui = self.search_ui.with_ui_config(config);
		self
	}

	fn with_initial_query(mut self, query: String) -> Self {
		self.search_ui = self.search_ui.with_initial_query(query);
		self
	}

	fn with_theme(mut self, theme: &str) -> Self {
		self.search_ui = self.search_ui.with_theme_name(theme);
		self
	}

	fn finish(self) -> SearchUi {
		self.search_ui
	}
}
