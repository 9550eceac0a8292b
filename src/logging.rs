//! Logging setup.
//!
//! Stdout carries the flag line consumed by the build, so log output always
//! goes to stderr. A normal run is silent apart from warnings.

use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Maximum log level for a run.
fn max_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::WARN }
}

/// Install the global tracing subscriber.
///
/// Logs at WARN, or DEBUG when `verbose` is set. Colour is only used when
/// stderr is a terminal. If a subscriber is already installed it is kept.
pub fn init(verbose: bool) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(max_level(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
