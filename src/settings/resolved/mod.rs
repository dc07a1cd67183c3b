use anyhow::{Context, Result};
use reqwest::Url;
use srch::UiConfig;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub endpoint: String,
	pub initial_query: String,
	pub theme: String,
	pub ui: UiConfig,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Parsed search endpoint.
	pub fn endpoint_url(&self) -> Result<Url> {
		Url::parse(&self.endpoint)
			.with_context(|| format!("invalid search endpoint {:?}", self.endpoint))
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
