//! Logger setup for the two ways `srch` runs.
//!
//! The interactive UI routes every `log` record into `tui-logger` so nothing is
//! written over the terminal; the log pane reads from its buffer. Headless
//! runs log to stderr through `env_logger`.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the in-memory `tui-logger` backend. Safe to call repeatedly.
pub fn initialize() {
	INIT.call_once(|| {
		if tui_logger::init_logger(LevelFilter::Trace).is_ok() {
			tui_logger::set_default_level(LevelFilter::Debug);
		}
	});
}

/// Install a stderr logger honouring `RUST_LOG`, defaulting to `warn`.
pub fn initialize_stderr() {
	INIT.call_once(|| {
		let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
			.try_init();
	});
}

