//! Core crate exports for building and running the `srch` terminal client.
//!
//! The root module re-exports the search transport and the UI builder so that
//! embedders can point the client at their own backend without digging
//! through the module hierarchy.

pub mod app_dirs;
pub mod logging;
pub mod search;
pub mod ui;

pub use search::{
	DEFAULT_ENDPOINT, HttpBackend, ResultItem, ResultLink, ResultList, SearchBackend,
	SearchError, SearchRequest,
};
pub use ui::{App, SearchOutcome, SearchUi, UiConfig};
pub use ui::style::{Theme, default_theme};
