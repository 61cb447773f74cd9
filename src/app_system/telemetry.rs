use tracing_subscriber::EnvFilter;

use crate::config::DirectoryConfig;

/// Installs the global compact fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `config.log_filter` is used. Calling this
/// a second time is a no-op.
pub fn setup_tracing(config: &DirectoryConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .try_init();
}
