#[test]
fn repeated_initialization_is_harmless() {
	srch::logging::initialize();
	srch::logging::initialize();
	srch::logging::initialize_stderr();
	log::info!("logger initialized twice");
}
