//! `tracing` setup and terminal helpers.
use nu_ansi_term::Color;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::config::Config;

/// Print `s` to stderr in red.
pub fn eprintln_red(s: &str) {
    eprintln!("{}", Color::Red.bold().paint(s));
}

/// Install the global `tracing` subscriber.
///
/// Logs go to stderr, stdout is reserved for program output.
pub fn init_logging(config: &Config) {
    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(config.tracing.level);

    if let Err(e) = tracing_subscriber::registry().with(stderr_layer).try_init() {
        eprintln_red(&format!("Failed to initialize logging: {e}"));
    }
}
