use serde::Serialize;

use crate::search::ResultLink;

/// What the session ended with: the last query and the highlighted link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
	pub query: String,
	pub selection: Option<ResultLink>,
}
