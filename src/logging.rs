use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Diagnostics go to stderr; stdout is reserved for the JSON result.
pub fn init_tracing() {
    init_tracing_with_level("info");
}

pub fn init_tracing_with_level(level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .ok();
}
