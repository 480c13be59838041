use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static LOGGER_INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initializes the global tracing subscriber
///
/// Safe to call multiple times; only the first call installs the subscriber.
/// The filter is taken from `RUST_LOG`, defaulting to `info` when unset.
pub fn setup_logger() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .ok();
    });
}
