use serde::Deserialize;
use srch::DEFAULT_ENDPOINT;

use crate::cli::CliArgs;

/// Search service settings prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) endpoint: Option<String>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(endpoint) = cli.endpoint.clone() {
			self.endpoint = Some(endpoint);
		}
	}

	pub(super) fn finalize(self) -> String {
		self.endpoint
			.map(|endpoint| endpoint.trim().to_string())
			.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
	}
}
