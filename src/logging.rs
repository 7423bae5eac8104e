//! Diagnostic tracing for the CLI
//!
//! User-facing results go to stdout through `output`; tracing events are
//! diagnostics on stderr, controlled by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where diagnostic events are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// No subscriber; the TUI owns the terminal
    Disabled,
}

/// Initialize the tracing subscriber
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=wordtree=debug wordtree insert pear
/// ```
pub fn init(target: LogTarget) {
    if target == LogTarget::Disabled {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
