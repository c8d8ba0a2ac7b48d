pub mod banner;

/// Prints the welcome banner. Call once at startup (e.g. in main after tracing init).
pub fn init_ui(model_configured: bool) {
    banner::print_welcome(model_configured);
}
