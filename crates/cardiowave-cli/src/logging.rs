//! Diagnostic logging setup.

use tracing::Level;

/// Maps the number of `-v` flags to a log level.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs a stderr fmt subscriber at the level implied by `verbose`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for_verbosity(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
