pub mod banner;
pub mod console;
pub mod progress;

pub use console::ConsoleSink;

/// Prints the welcome banner. Call once at startup (e.g. in main after tracing init).
pub fn init_ui() {
    banner::print_welcome();
}
