use clap::ValueEnum;

/// Built-in themes selectable from the CLI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ThemeArg {
	Dark,
	Light,
}

impl ThemeArg {
	/// Return the theme name consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			ThemeArg::Dark => "dark",
			ThemeArg::Light => "light",
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
