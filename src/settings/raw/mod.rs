use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod search;
mod ui;

use search::SearchSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	search: SearchSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.search.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			search_endpoint: detect_source(
				cli.endpoint.is_some(),
				self.search.endpoint.is_some(),
				"SRCH__SEARCH__ENDPOINT",
				"--endpoint",
				"search.endpoint",
			),
			ui_theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"SRCH__UI__THEME",
				"--theme",
				"ui.theme",
			),
		};

		let endpoint = self.search.finalize();
		let ui = self.ui.finalize();

		let config = ResolvedConfig {
			endpoint,
			initial_query: ui.initial_query,
			theme: ui.theme,
			ui: ui.ui,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
