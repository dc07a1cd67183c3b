//! UI building blocks shared across rendering and state modules.

/// Diagnostic log pane.
pub mod logs;
/// Prompt row: title, query field, spinner and search button.
pub mod prompt;
/// Result list rendering.
pub mod results;
/// Footer showing the highlighted link and key hints.
pub mod status;

pub use logs::render_logs;
pub use prompt::{PromptContext, render_prompt};
pub use results::{ResultsContext, render_results, result_links};
pub use status::render_status;
