use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::outcome::SearchOutcome;
use super::state::Focus;

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
		match key.code {
			KeyCode::Esc => return Some(self.outcome()),
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Some(self.outcome());
			}
			KeyCode::F(2) => self.toggle_logs(),
			KeyCode::Tab => self.focus = self.focus.next(),
			KeyCode::BackTab => self.focus = self.focus.previous(),
			KeyCode::Enter => match self.focus {
				Focus::Input | Focus::Button => {
					self.trigger_search();
				}
				Focus::Results => self.open_selected(),
			},
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ => {
				if self.focus != Focus::Input {
					self.focus = Focus::Input;
				}
				self.search_input.input(key);
			}
		}
		None
	}

	fn open_selected(&mut self) {
		let Some(link) = self.selected_link() else {
			return;
		};
		match (self.open_link)(&link.url) {
			Ok(()) => log::info!("opened {}", link.url),
			Err(err) => log::warn!("failed to open {}: {err}", link.url),
		}
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.list_state.selected()
			&& selected > 0
		{
			self.list_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.list_state.selected()
			&& selected + 1 < self.results.len()
		{
			self.list_state.select(Some(selected + 1));
		}
	}
}
