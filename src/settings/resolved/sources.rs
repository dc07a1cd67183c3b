use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
	Default,
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
			Self::Default => write!(f, "built-in default"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) search_endpoint: Option<SettingSource>,
	pub(crate) ui_theme: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_endpoint(&self) -> SettingSource {
		self.search_endpoint.clone().unwrap_or(SettingSource::Default)
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.ui_theme.clone().unwrap_or(SettingSource::Default)
	}
}
