// crates/cli/src/logging.rs
use tracing_subscriber::filter::LevelFilter;

/// Maps the `-v` count onto a level. Warnings are always shown.
#[must_use]
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs a stderr subscriber. Records sent through the `log` facade by
/// the engine are forwarded to it.
pub fn init(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level_for(verbose))
        .with_target(false)
        .without_time()
        .try_init();
}
