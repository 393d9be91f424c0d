//! Process-wide `tracing` setup. Events go to stdout so failure causes end up
//! next to the server's own output.

use anyhow::anyhow;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

pub fn init_logging() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .try_init()
        .map_err(|e| anyhow!("tracing setup failed: {e}"))
}
