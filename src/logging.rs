//! Diagnostic logging
//!
//! Operator-facing warnings go through the event sinks; this is for
//! `-v` diagnostics only. The level comes from the command line, never
//! from the environment.

use tracing::level_filters::LevelFilter;

/// Map the `-v` count to a level: error, info, debug, then trace.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Initialize the tracing subscriber, writing to stderr.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(verbose: u8, ansi: bool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(verbose))
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(std::io::stderr)
        .try_init();
}
