use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Default filter; menu output stays clean unless `RUST_LOG` asks for more.
const DEFAULT_DIRECTIVE: &str = "pocket_ledger=warn";

/// Initializes the global tracing subscriber, logging to stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
