//! Log subscriber setup
//!
//! The subscriber is installed before settings are loaded so that events
//! raised while loading them are not lost. Its filter is held behind a
//! reload handle and switched to the configured `log_level` afterwards,
//! unless `--verbose` or `RUST_LOG` already fixed it.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

/// Filter used until settings say otherwise
pub const DEFAULT_LEVEL: &str = "warn";

/// Handle to the installed subscriber's filter
pub struct Logging {
    handle: reload::Handle<EnvFilter, Registry>,
    pinned: bool,
}

/// Filter directives fixed at startup: `--verbose` wins, then `RUST_LOG`.
///
/// `None` means the configured level decides.
pub fn startup_filter(verbose: bool, rust_log: Option<&str>) -> Option<String> {
    if verbose {
        return Some("debug".to_string());
    }
    rust_log
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .map(str::to_string)
}

/// Install the global subscriber. Logs go to stderr.
pub fn init(verbose: bool) -> Logging {
    let rust_log = std::env::var("RUST_LOG").ok();
    let pinned = startup_filter(verbose, rust_log.as_deref())
        .and_then(|directives| EnvFilter::try_new(directives).ok());

    let is_pinned = pinned.is_some();
    let (filter, handle) =
        reload::Layer::new(pinned.unwrap_or_else(|| EnvFilter::new(DEFAULT_LEVEL)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    Logging {
        handle,
        pinned: is_pinned,
    }
}

impl Logging {
    /// Switch to the configured level unless the filter was pinned at startup
    pub fn apply_level(&self, level: &str) {
        if self.pinned {
            return;
        }

        match EnvFilter::try_new(level) {
            Ok(filter) => {
                if let Err(e) = self.handle.reload(filter) {
                    tracing::warn!(error = %e, "Failed to apply log level");
                }
            },
            Err(e) => tracing::warn!(%level, error = %e, "Ignoring invalid log level"),
        }
    }
}
