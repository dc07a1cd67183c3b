use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use super::style::Theme;

/// Single-line text field holding the current query.
///
/// The value is whatever the user typed; nothing is trimmed or validated.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
		self.textarea.set_placeholder_text(placeholder);
	}

	pub fn apply_theme(&mut self, theme: &Theme) {
		self.textarea.set_style(theme.input_style());
		self.textarea.set_placeholder_style(theme.placeholder_style());
	}

	/// Current query text.
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key press to the field. Returns `true` when the text changed.
	///
	/// Line breaks are never inserted; `Enter` belongs to the caller.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if inserts_line_break(&key) {
			return false;
		}
		self.textarea.input(key)
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn inserts_line_break(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn type_text(input: &mut SearchInput<'_>, text: &str) {
		for ch in text.chars() {
			input.input(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
		}
	}

	#[test]
	fn typed_text_is_echoed_verbatim() {
		let mut input = SearchInput::new("");
		type_text(&mut input, "  Grüße, wörld!  ");
		assert_eq!(input.text(), "  Grüße, wörld!  ");
	}

	#[test]
	fn initial_text_is_kept_and_cursor_at_end() {
		let mut input = SearchInput::new("react");
		type_text(&mut input, " hooks");
		assert_eq!(input.text(), "react hooks");
	}

	#[test]
	fn backspace_edits_the_value() {
		let mut input = SearchInput::new("abc");
		assert!(input.input(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)));
		assert_eq!(input.text(), "ab");
	}

	#[test]
	fn line_breaks_are_rejected() {
		let mut input = SearchInput::new("one");
		assert!(!input.input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "one");
	}
}
