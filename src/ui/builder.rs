use std::sync::Arc;

use anyhow::Result;

use super::App;
use super::config::UiConfig;
use super::outcome::SearchOutcome;
use super::style::{Theme, by_name};
use crate::search::SearchBackend;

/// A small builder for configuring the interactive search client before
/// running it.
pub struct SearchUi {
	backend: Arc<dyn SearchBackend>,
	ui_config: Option<UiConfig>,
	theme: Option<Theme>,
	initial_query: String,
}

impl SearchUi {
	pub fn with_backend(backend: Arc<dyn SearchBackend>) -> Self {
		Self {
			backend,
			ui_config: None,
			theme: None,
			initial_query: String::new(),
		}
	}

	pub fn with_ui_config(mut self, config: UiConfig) -> Self {
		self.ui_config = Some(config);
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	/// Select a built-in theme; unknown names keep the default.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		match by_name(name) {
			Some(theme) => self.theme = Some(theme),
			None => log::warn!("unknown theme {name:?}, keeping the default"),
		}
		self
	}

	/// Build the [`App`] without starting the terminal.
	pub fn into_app<'a>(self) -> App<'a> {
		let mut app = App::new(self.backend);
		if let Some(config) = self.ui_config {
			app.set_ui_config(config);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app.set_query(self.initial_query);
		app
	}

	pub fn run(self) -> Result<SearchOutcome> {
		self.into_app().run()
	}
}
