use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::ui::input::SearchInput;
use crate::ui::style::Theme;

/// Argument bundle for rendering the prompt row.
pub struct PromptContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	pub title: &'a str,
	pub button_label: &'a str,
	pub button_focused: bool,
	pub pending: usize,
	pub throbber_state: &'a ThrobberState,
	pub theme: &'a Theme,
}

/// Render `<title> > <input> <spinner> [ <button> ]` on a single row.
pub fn render_prompt(frame: &mut Frame, area: Rect, prompt: PromptContext<'_>) {
	let PromptContext {
		search_input,
		title,
		button_label,
		button_focused,
		pending,
		throbber_state,
		theme,
	} = prompt;

	let prompt_text = prompt_label(title);
	let button_text = button_text(button_label);
	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(prompt_text.width() as u16),
			Constraint::Min(1),
			Constraint::Length(2),
			Constraint::Length(button_text.width() as u16),
		])
		.split(area);

	if !prompt_text.is_empty() {
		let widget = Paragraph::new(prompt_text).style(theme.prompt_style());
		frame.render_widget(widget, horizontal[0]);
	}

	search_input.render(frame, horizontal[1]);

	if pending > 0 {
		let spinner = Throbber::default()
			.style(theme.status_style())
			.throbber_style(theme.status_style());
		let line = Line::from(vec![spinner.to_symbol_span(throbber_state)]);
		frame.render_widget(Paragraph::new(line), horizontal[2]);
	}

	let button = Paragraph::new(Line::from(Span::styled(
		button_text,
		theme.button_style(button_focused),
	)));
	frame.render_widget(button, horizontal[3]);
}

fn prompt_label(title: &str) -> String {
	if title.is_empty() {
		String::new()
	} else {
		format!("{title} > ")
	}
}

fn button_text(label: &str) -> String {
	format!("[ {label} ]")
}
