use reqwest::Url;
use srch::ui::style;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	match Url::parse(&config.endpoint) {
		Ok(url) if matches!(url.scheme(), "http" | "https") => {}
		Ok(url) => {
			return Err(ConfigError::invalid(
				"search.endpoint",
				config.endpoint.clone(),
				sources.source_for_endpoint(),
				format!("unsupported scheme `{}`, expected http or https", url.scheme()),
			));
		}
		Err(err) => {
			return Err(ConfigError::invalid(
				"search.endpoint",
				config.endpoint.clone(),
				sources.source_for_endpoint(),
				format!("not an absolute URL ({err})"),
			));
		}
	}

	if style::by_name(&config.theme).is_none() {
		let known: Vec<&str> = style::names().collect();
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme.clone(),
			sources.source_for_theme(),
			format!("expected one of {}", known.join(", ")),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use srch::UiConfig;

	use super::super::SettingSource;
	use super::*;

	fn config(endpoint: &str, theme: &str) -> ResolvedConfig {
		ResolvedConfig {
			endpoint: endpoint.to_string(),
			initial_query: String::new(),
			theme: theme.to_string(),
			ui: UiConfig::default(),
		}
	}

	#[test]
	fn default_configuration_is_valid() {
		let config = config(srch::DEFAULT_ENDPOINT, "dark");
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_relative_endpoint() {
		let sources = ConfigSources {
			search_endpoint: Some(SettingSource::CliFlag("--endpoint")),
			..ConfigSources::default()
		};

		let err = validate(&config("/search", "dark"), &sources).unwrap_err();
		assert_eq!(err.key, "search.endpoint");
		let message = err.to_string();
		assert!(message.contains("value: /search"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_non_http_scheme() {
		let sources = ConfigSources {
			search_endpoint: Some(SettingSource::Environment("SRCH__SEARCH__ENDPOINT")),
			..ConfigSources::default()
		};

		let err = validate(&config("ftp://example.com/search", "dark"), &sources).unwrap_err();
		let message = err.to_string();
		assert!(message.contains("unsupported scheme `ftp`"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn validation_rejects_unknown_theme() {
		let err = validate(
			&config(srch::DEFAULT_ENDPOINT, "neon"),
			&ConfigSources::default(),
		)
		.unwrap_err();
		assert_eq!(err.key, "ui.theme");
		assert!(err.to_string().contains("dark, light"));
	}
}
