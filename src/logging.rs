//! Tracing subscriber setup.
//!
//! Everything logs through `tracing` macros; this module only decides where the
//! events go and how much of them. `RUST_LOG` wins over the configured level so
//! a single run can be made noisier without touching the environment file.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global fmt subscriber. Safe to call more than once; only the
/// first call takes effect.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init();
}
