use env_logger::Env;
use std::sync::OnceLock;

static LOGGER: OnceLock<()> = OnceLock::new();

const LOG_FILTER_ENV: &str = "ZKWALLET_LOG";

/// Install the process-wide logger once. `ZKWALLET_LOG` overrides `RUST_LOG`,
/// and both fall back to `info`.
pub fn init_logger() {
    LOGGER.get_or_init(|| {
        let env = if std::env::var(LOG_FILTER_ENV).is_ok() {
            Env::new().filter(LOG_FILTER_ENV)
        } else {
            Env::default().default_filter_or("info")
        };
        // another logger may already be installed by the embedding application
        let _ = env_logger::Builder::from_env(env)
            .format_timestamp_millis()
            .try_init();
    });
}
