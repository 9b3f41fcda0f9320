//! Tracing initialization and configuration.

use std::sync::Once;

use tracing::Subscriber;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults;

static INIT: Once = Once::new();

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV_VAR: &str = "TARDISIM_LOG";

const CRATE_TARGETS: [&str; 5] = [
    "tardisim_core",
    "tardisim_analysis",
    "tardisim_report",
    "tardisim_cli",
    "tardisim",
];

/// Initialize logging with the compiled default level.
pub fn init_tracing() {
    init_tracing_with_level(defaults::DEFAULT_LOG_LEVEL);
}

/// Initialize the tardisim tracing/logging system.
///
/// Reads `TARDISIM_LOG` for per-crate log levels.
/// Format: `TARDISIM_LOG=tardisim_analysis=debug,tardisim_report=warn`
///
/// Falls back to `default_level` for every tardisim crate if `TARDISIM_LOG`
/// is unset or invalid. Output goes to stderr so rendered reports on stdout
/// stay machine-readable.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing_with_level(default_level: &str) {
    INIT.call_once(|| {
        // A subscriber installed by an embedding application wins.
        let _ = build_subscriber(default_level).try_init();
    });
}

/// Run `f` under a temporary subscriber at `default_level`.
///
/// The log level lives in the config, so config loading itself runs before
/// the global subscriber exists. This keeps its events visible.
pub fn with_bootstrap_tracing<T>(default_level: &str, f: impl FnOnce() -> T) -> T {
    tracing::subscriber::with_default(build_subscriber(default_level), f)
}

fn build_subscriber(default_level: &str) -> impl Subscriber + Send + Sync + 'static {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directives(default_level)));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
}

/// Build the fallback filter covering every workspace crate.
fn default_directives(level: &str) -> String {
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
