/// Text used by the UI when rendering the prompt row and the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub input_title: String,
	pub placeholder: String,
	pub button_label: String,
	pub results_title: String,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			input_title: "Search".to_string(),
			placeholder: "Search...".to_string(),
			button_label: "Search".to_string(),
			results_title: "Results".to_string(),
		}
	}
}

impl UiConfig {
	#[must_use]
	pub fn with_input_title(mut self, title: impl Into<String>) -> Self {
		self.input_title = title.into();
		self
	}

	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	#[must_use]
	pub fn with_results_title(mut self, title: impl Into<String>) -> Self {
		self.results_title = title.into();
		self
	}
}
