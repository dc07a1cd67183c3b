mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{
	CliArgs, OutputFormat, parse_cli, print_json, print_links_json, print_links_plain, print_plain,
};
use settings::ResolvedConfig;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in srch::ui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	if cli.once {
		srch::logging::initialize_stderr();
	} else {
		srch::logging::initialize();
	}

	let resolved = settings::load(&cli)?;

	if summary_before_run(&cli) {
		resolved.print_summary();
	}

	if cli.once {
		run_once(&cli, resolved)
	} else {
		run_search(&cli, resolved)
	}
}

/// Headless runs print the configuration summary up front.
fn summary_before_run(cli: &CliArgs) -> bool {
	cli.print_config && cli.once
}

/// The terminal UI clears the screen, so interactive runs print the summary
/// once it exits.
fn summary_after_run(cli: &CliArgs) -> bool {
	cli.print_config && !cli.once
}

/// Execute the interactive client and print the outcome in the chosen format.
fn run_search(cli: &CliArgs, settings: ResolvedConfig) -> Result<()> {
	let summary = summary_after_run(cli).then(|| settings.clone());
	let workflow = SearchWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	if let Some(settings) = summary {
		settings.print_summary();
	}

	match cli.output {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}

/// Execute a single headless search and print the links.
fn run_once(cli: &CliArgs, settings: ResolvedConfig) -> Result<()> {
	let results = SearchWorkflow::from_config(settings)?.run_once()?;

	match cli.output {
		OutputFormat::Plain => print_links_plain(&results),
		OutputFormat::Json => print_links_json(&results)?,
	}

	Ok(())
}
