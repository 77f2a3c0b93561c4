use tracing_subscriber::{fmt, EnvFilter};

/// Installs the JSON log subscriber for a function instance.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Safe to call more
/// than once; later calls are ignored.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_file(true)
        .with_line_number(true)
        .json()
        .flatten_event(true)
        .try_init();
}
