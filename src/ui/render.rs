use ratatui::{
	Frame,
	layout::{Constraint, Direction, Layout, Margin, Rect},
};

use super::App;
use super::components::{
	PromptContext, ResultsContext, render_logs, render_prompt, render_results, render_status,
};
use super::state::Focus;

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let (main_area, log_area) = self.split_log_pane(area);

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(main_area);

		let prompt = PromptContext {
			search_input: &self.search_input,
			title: &self.ui.input_title,
			button_label: &self.ui.button_label,
			button_focused: self.focus == Focus::Button,
			pending: self.search.in_flight(),
			throbber_state: &self.throbber_state,
			theme: &self.theme,
		};
		render_prompt(frame, layout[0], prompt);

		let results = ResultsContext {
			results: &self.results,
			title: &self.ui.results_title,
			focused: self.focus == Focus::Results,
			theme: &self.theme,
		};
		render_results(frame, layout[1], &mut self.list_state, results);

		let selected = self.selected_link();
		render_status(frame, layout[2], selected.as_ref(), &self.theme);

		if let Some(log_area) = log_area {
			render_logs(frame, log_area, &self.log_state, &self.theme);
		}
	}

	fn split_log_pane(&self, area: Rect) -> (Rect, Option<Rect>) {
		if !self.show_logs {
			return (area, None);
		}
		let split = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
			.split(area);
		(split[0], Some(split[1]))
	}
}
