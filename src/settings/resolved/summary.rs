use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	print!("{}", format_summary(config));
}

fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::from("Effective configuration:\n");
	out.push_str(&format!("  Endpoint: {}\n", config.endpoint));
	out.push_str(&format!("  UI theme: {}\n", config.theme));
	out.push_str(&format!("  Prompt title: {}\n", config.ui.input_title));
	out.push_str(&format!("  Placeholder: {}\n", config.ui.placeholder));
	out.push_str(&format!("  Results title: {}\n", config.ui.results_title));
	if !config.initial_query.is_empty() {
		out.push_str(&format!("  Initial query: {:?}\n", config.initial_query));
	}
	out
}
