//! Interactive terminal UI for `srch`.
//!
//! The [`builder`] module exposes the public-facing [`SearchUi`] builder. The
//! remaining submodules implement the event loop, rendering pipeline, state
//! management, and the widgets/style definitions used by the terminal client.

mod actions;
mod builder;
pub mod components;
mod config;
pub mod input;
mod outcome;
mod render;
mod runtime;
mod search;
mod state;
pub mod style;

pub use builder::SearchUi;
pub use config::UiConfig;
pub use outcome::SearchOutcome;
pub use state::{App, Focus, LinkOpener};
