use serde::Deserialize;
use srch::UiConfig;

use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) input_title: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) results_title: Option<String>,
	pub(super) theme: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) ui: UiConfig,
	pub(super) initial_query: String,
	pub(super) theme: String,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.input_title = Some(title);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.placeholder = Some(placeholder);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme {
			self.theme = Some(theme.as_str().to_string());
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let mut ui = UiConfig::default();
		if let Some(title) = self.input_title {
			ui = ui.with_input_title(title);
		}
		if let Some(placeholder) = self.placeholder {
			ui = ui.with_placeholder(placeholder);
		}
		if let Some(title) = self.results_title {
			ui = ui.with_results_title(title);
		}

		UiResolution {
			ui,
			// The initial query is kept exactly as given.
			initial_query: self.initial_query.unwrap_or_default(),
			theme: self
				.theme
				.map(|theme| theme.trim().to_ascii_lowercase())
				.unwrap_or_else(|| "dark".to_string()),
		}
	}
}
