//! Console logging setup.

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console logging to stderr.
///
/// Stdout belongs to the interactive UI, so log output goes to stderr.
///
/// # Configuration
///
/// - **Log Level**: Controlled by `LOG_LEVEL` environment variable
///   (default: "warn")
/// - **Filtering**: `RUST_LOG` overrides everything; noisy HTTP
///   dependencies are filtered to warn otherwise
pub fn init() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "gradeterm={log_level},gradeterm_client={log_level},hyper=warn,reqwest=warn"
        ))
    });

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer).init();
}
