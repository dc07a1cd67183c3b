use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, ThemeArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `srch` binary.
#[derive(Parser, Debug)]
#[command(
	name = "srch",
	version,
	long_version = long_version(),
	about = "Terminal client for a remote full-text search service",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SRCH_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'e',
		long,
		value_name = "URL",
		help = "Search endpoint to POST queries to (default: http://localhost:8000/search)"
	)]
	pub(crate) endpoint: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the input prompt title (default: Search)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Placeholder shown while the query is empty (default: Search...)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_enum,
		value_name = "THEME",
		help = "Select a theme by name (default: dark)"
	)]
	pub(crate) theme: Option<ThemeArg>,
	#[arg(
		long,
		help = "Run a single search for --query without the terminal UI and print the results"
	)]
	pub(crate) once: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
