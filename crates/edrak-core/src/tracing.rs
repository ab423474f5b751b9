use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured tracing on stderr. Call once at process startup.
/// Uses JSON format with env-filter (`RUST_LOG` env var), falling back to
/// `error` when `RUST_LOG` is unset or invalid.
///
/// Stdout is reserved for command output, so logs never go there.
///
/// Safe to call multiple times — subsequent calls are silently ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .try_init();
}
