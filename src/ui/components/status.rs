use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::search::ResultLink;
use crate::ui::style::Theme;

const HINTS: &str = "enter: search/open  tab: focus  f2: logs  esc: quit";

/// Render the highlighted link target on the left and key hints on the right.
pub fn render_status(frame: &mut Frame, area: Rect, selected: Option<&ResultLink>, theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	let target = selected.map(|link| link.url.as_str()).unwrap_or("");
	let hint_width = HINTS.width() as u16;
	let mut spans = vec![Span::styled(target.to_string(), theme.link_style())];
	let used = target.width() as u16;
	if used.saturating_add(hint_width).saturating_add(2) <= area.width {
		let padding = area.width - used - hint_width;
		spans.push(Span::raw(" ".repeat(padding as usize)));
		spans.push(Span::styled(HINTS, theme.status_style()));
	}

	frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
