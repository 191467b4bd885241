//! Diagnostics setup: `tracing` events go to stderr, user output to stdout.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Map the number of `-v` flags to a level. Warnings are always shown.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise only this crate logs, at the level
/// chosen with `-v`.
pub fn init_logger(verbose: u8) {
    let level = level_for(verbose);
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    // a second init (e.g. run() called twice in one process) is not an error
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
