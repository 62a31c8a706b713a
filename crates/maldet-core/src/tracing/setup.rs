//! Subscriber installation for binaries and tests.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Filter used when `MALDET_LOG` is unset or does not parse.
pub const DEFAULT_FILTER: &str = "maldet=info";

/// Install a stderr fmt subscriber filtered by `MALDET_LOG`.
///
/// Structured events carry the `maldet_core::tracing::events` target and
/// per-URL ones are at `debug`, so `MALDET_LOG=maldet=debug maldet --url ...`
/// adds a `url_scored` line to the default output, and
/// `MALDET_LOG=maldet_features=trace` shows extraction. Stdout stays
/// reserved for the CLI's summary or JSON. Only the first call installs
/// anything.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("MALDET_LOG")
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        // A test harness or embedding binary may already own the global default.
        if tracing_subscriber::registry()
            .with(layer)
            .with(filter)
            .try_init()
            .is_err()
        {
            ::tracing::debug!("global tracing subscriber already set");
        }
    });
}
