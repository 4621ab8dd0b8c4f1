#![forbid(unsafe_code)]

//! Logging bootstrap for hosts that do not install their own subscriber.
//!
//! Engine diagnostics are plain `tracing` events. Verbose transition logs
//! (the `debug` tour option) use the `tourkit::debug` target so they can be
//! filtered independently, e.g. `RUST_LOG=info,tourkit::debug=off`.

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber honoring `RUST_LOG` (default `info`).
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_logging(json: bool) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_reports_false() {
        let _ = init_logging(true);
        assert!(!init_logging(false));
    }
}
