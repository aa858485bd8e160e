//! Diagnostic logging.
//!
//! Events go to stderr so stdout stays clean for command output and the MCP
//! transport. `LOCX_LOG` takes an `EnvFilter` directive string and wins over
//! the verbosity flag.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV_VAR: &str = "LOCX_LOG";

/// Directive used when `LOCX_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "warn,locx=debug" } else { "warn" }
}

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
