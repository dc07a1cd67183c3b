use anyhow::Result;
use serde_json::json;
use srch::{ResultList, SearchOutcome};

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	match &outcome.selection {
		Some(link) => println!("{}", link.url),
		None => println!("No selection"),
	}
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let payload = json!({
		"query": outcome.query,
		"selection": outcome.selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// One `title<TAB>url` line per result.
pub(crate) fn format_links_plain(results: &ResultList) -> String {
	results
		.links()
		.map(|link| format!("{}\t{}\n", link.title, link.url))
		.collect()
}

pub(crate) fn print_links_plain(results: &ResultList) {
	print!("{}", format_links_plain(results));
}

/// Print the response body exactly as the service returned it.
pub(crate) fn print_links_json(results: &ResultList) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(results.as_value())?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;
	use srch::ResultLink;

	use super::*;

	#[test]
	fn json_format_includes_selection() {
		let outcome = SearchOutcome {
			query: "test".into(),
			selection: Some(ResultLink {
				index: 0,
				title: "Title".into(),
				url: "http://t".into(),
			}),
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["query"], "test");
		assert_eq!(value["selection"]["title"], "Title");
		assert_eq!(value["selection"]["url"], "http://t");
	}

	#[test]
	fn json_format_uses_null_without_selection() {
		let outcome = SearchOutcome {
			query: String::new(),
			selection: None,
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert!(value["selection"].is_null());
	}

	#[test]
	fn plain_links_are_tab_separated() {
		let results = ResultList::from(json!([
			{"title": "A", "url": "http://a"},
			{"url": "http://untitled"},
		]));

		assert_eq!(format_links_plain(&results), "A\thttp://a\n\thttp://untitled\n");
	}
}
