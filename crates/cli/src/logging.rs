use tracing::subscriber::DefaultGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::Config;
use crate::version::BUILD;

/// Logger owned by the entry point.
///
/// The subscriber is only the default while this value is alive; nothing is
/// installed globally. Logs go to stderr so stdout carries only the result.
pub struct Logger {
    _guard: DefaultGuard,
}

impl Logger {
    pub fn new(config: &Config) -> Self {
        let env_filter = EnvFilter::builder()
            .with_default_directive((*config.log_level()).into())
            .from_env_lossy();

        let stderr_layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_filter(env_filter);

        let guard = tracing_subscriber::registry().with(stderr_layer).set_default();

        if let Some(level) = config.rejected_log_level() {
            tracing::warn!(
                "invalid LOG_LEVEL {level:?}, using default {}",
                config.log_level()
            );
        }
        if !config.env_file_loaded() {
            tracing::debug!("no .env file found");
        }

        Self { _guard: guard }
    }
}

pub fn register_panic_logger() {
    std::panic::set_hook(Box::new(|panic| match panic.location() {
        Some(loc) => {
            tracing::error!(
                message = %panic,
                panic.file = loc.file(),
                panic.line = loc.line(),
                panic.column = loc.column(),
            );
        }
        None => tracing::error!(message = %panic),
    }));
}

pub fn report_version() {
    tracing::debug!(
        build_profile = BUILD.profile,
        features = BUILD.features,
        repo_version = BUILD.repo_version,
        version = BUILD.version,
        "{BUILD} starting up"
    );
}
