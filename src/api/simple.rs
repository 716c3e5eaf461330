use std::io::IsTerminal;
use std::sync::Once;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::LoaderConfig;

static INIT_TRACING: Once = Once::new();

/// Install the stderr tracing subscriber. Only the first call has any effect.
pub fn init_logging(config: &LoaderConfig) {
    INIT_TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(true)
            .try_init();

        info!("fragment loader tracing initialized");
    });
}
