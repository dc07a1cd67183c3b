use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	pub prompt: Style,
	pub input: Style,
	pub placeholder: Style,
	pub button: Style,
	pub button_focused: Style,
	pub header: Style,
	pub link: Style,
	pub row_highlight: Style,
	pub status: Style,
}

impl Theme {
	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn input_style(&self) -> Style {
		self.input
	}

	#[must_use]
	pub fn placeholder_style(&self) -> Style {
		self.placeholder
	}

	#[must_use]
	pub fn button_style(&self, focused: bool) -> Style {
		if focused {
			self.button_focused
		} else {
			self.button
		}
	}

	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn link_style(&self) -> Style {
		self.link
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn status_style(&self) -> Style {
		self.status
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

const DARK: Theme = Theme {
	prompt: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
	input: Style::new().fg(Color::White),
	placeholder: Style::new().fg(Color::DarkGray),
	button: Style::new().fg(Color::Gray),
	button_focused: Style::new()
		.fg(Color::Black)
		.bg(Color::Cyan)
		.add_modifier(Modifier::BOLD),
	header: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
	link: Style::new().fg(Color::LightBlue).add_modifier(Modifier::UNDERLINED),
	row_highlight: Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
	status: Style::new().fg(Color::DarkGray),
};

const LIGHT: Theme = Theme {
	prompt: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
	input: Style::new().fg(Color::Black),
	placeholder: Style::new().fg(Color::Gray),
	button: Style::new().fg(Color::DarkGray),
	button_focused: Style::new()
		.fg(Color::White)
		.bg(Color::Blue)
		.add_modifier(Modifier::BOLD),
	header: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
	link: Style::new().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
	row_highlight: Style::new().bg(Color::Gray).add_modifier(Modifier::BOLD),
	status: Style::new().fg(Color::Gray),
};

const BUILTINS: [(&str, Theme); 2] = [("dark", DARK), ("light", LIGHT)];

#[must_use]
pub fn default_theme() -> Theme {
	DARK
}

/// Look up a built-in theme, ignoring ASCII case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	BUILTINS
		.iter()
		.find(|(candidate, _)| candidate.eq_ignore_ascii_case(name.trim()))
		.map(|(_, theme)| *theme)
}

pub fn names() -> impl Iterator<Item = &'static str> {
	BUILTINS.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_is_case_insensitive() {
		assert_eq!(by_name("Light"), Some(LIGHT));
		assert_eq!(by_name(" dark "), Some(DARK));
		assert!(by_name("solarized").is_none());
	}

	#[test]
	fn names_list_every_builtin() {
		let names: Vec<_> = names().collect();
		assert_eq!(names, vec!["dark", "light"]);
	}

	#[test]
	fn focused_button_is_distinct() {
		let theme = Theme::default();
		assert_ne!(theme.button_style(true), theme.button_style(false));
	}
}
