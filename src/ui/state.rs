use std::io;
use std::sync::Arc;

use log::LevelFilter;
use ratatui::widgets::ListState;
use throbber_widgets_tui::ThrobberState;
use tui_logger::TuiWidgetState;

use super::config::UiConfig;
use super::input::SearchInput;
use super::outcome::SearchOutcome;
pub use super::style::Theme;
use crate::search::{ResultLink, ResultList, SearchBackend};

mod search_runtime;

pub(crate) use search_runtime::SearchRuntime;

/// Opens a result link in a new browser context.
pub type LinkOpener = fn(&str) -> io::Result<()>;

fn open_in_browser(url: &str) -> io::Result<()> {
	open::that_detached(url)
}

/// Which control receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	#[default]
	Input,
	Button,
	Results,
}

impl Focus {
	pub(crate) fn next(self) -> Self {
		match self {
			Self::Input => Self::Button,
			Self::Button => Self::Results,
			Self::Results => Self::Input,
		}
	}

	pub(crate) fn previous(self) -> Self {
		match self {
			Self::Input => Self::Results,
			Self::Button => Self::Input,
			Self::Results => Self::Button,
		}
	}
}

pub struct App<'a> {
	pub search_input: SearchInput<'a>,
	pub results: ResultList,
	pub list_state: ListState,
	pub focus: Focus,
	pub(crate) ui: UiConfig,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) show_logs: bool,
	pub(crate) log_state: TuiWidgetState,
	pub(crate) open_link: LinkOpener,
	pub(crate) search: SearchRuntime,
}

impl<'a> App<'a> {
	pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
		let ui = UiConfig::default();
		let theme = Theme::default();
		let mut search_input = SearchInput::new(String::new());
		search_input.set_placeholder(ui.placeholder.clone());
		search_input.apply_theme(&theme);

		Self {
			search_input,
			results: ResultList::default(),
			list_state: ListState::default(),
			focus: Focus::default(),
			ui,
			theme,
			throbber_state: ThrobberState::default(),
			show_logs: false,
			log_state: TuiWidgetState::new().set_default_display_level(LevelFilter::Debug),
			open_link: open_in_browser,
			search: SearchRuntime::new(backend),
		}
	}

	pub fn set_ui_config(&mut self, ui: UiConfig) {
		self.search_input.set_placeholder(ui.placeholder.clone());
		self.ui = ui;
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.search_input.apply_theme(&theme);
		self.theme = theme;
	}

	/// Replace the query text as if the user had typed it.
	pub fn set_query(&mut self, query: impl Into<String>) {
		let mut input = SearchInput::new(query);
		input.set_placeholder(self.ui.placeholder.clone());
		input.apply_theme(&self.theme);
		self.search_input = input;
	}

	pub fn set_link_opener(&mut self, opener: LinkOpener) {
		self.open_link = opener;
	}

	pub fn query(&self) -> &str {
		self.search_input.text()
	}

	/// Number of searches still waiting for a response.
	pub fn pending_searches(&self) -> usize {
		self.search.in_flight()
	}

	pub fn selected_link(&self) -> Option<ResultLink> {
		let index = self.list_state.selected()?;
		self.results.get(index).map(|item| item.to_link(index))
	}

	pub fn outcome(&self) -> SearchOutcome {
		SearchOutcome {
			query: self.query().to_string(),
			selection: self.selected_link(),
		}
	}

	pub(crate) fn toggle_logs(&mut self) {
		self.show_logs = !self.show_logs;
	}

	pub(crate) fn ensure_selection(&mut self) {
		let len = self.results.len();
		if len == 0 {
			self.list_state.select(None);
			return;
		}
		match self.list_state.selected() {
			Some(selected) if selected < len => {}
			_ => self.list_state.select(Some(0)),
		}
	}
}
