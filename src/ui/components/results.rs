use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::search::{ResultLink, ResultList};
use crate::ui::style::Theme;

/// Argument bundle for rendering the result list.
pub struct ResultsContext<'a> {
	pub results: &'a ResultList,
	pub title: &'a str,
	pub focused: bool,
	pub theme: &'a Theme,
}

/// Project the result list into link entries, one per item, in list order.
///
/// Re-derived on every frame; the position is the only identity an entry has.
pub fn result_links(results: &ResultList) -> impl Iterator<Item = ResultLink> + '_ {
	results.links()
}

/// Render the result list. An empty list renders as nothing at all.
pub fn render_results(
	frame: &mut Frame,
	area: Rect,
	state: &mut ListState,
	context: ResultsContext<'_>,
) {
	let ResultsContext {
		results,
		title,
		focused,
		theme,
	} = context;

	let items: Vec<ListItem<'_>> = result_links(results)
		.map(|link| ListItem::new(Line::from(Span::styled(link.title, theme.link_style()))))
		.collect();

	let header_style = if focused {
		theme.header_style()
	} else {
		theme.status_style()
	};
	let block = Block::default()
		.borders(Borders::TOP)
		.title(Span::styled(title.to_string(), header_style));

	let list = List::new(items)
		.block(block)
		.highlight_style(theme.row_highlight_style())
		.highlight_symbol("> ");

	frame.render_stateful_widget(list, area, state);
}
