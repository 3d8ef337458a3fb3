//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber: an `EnvFilter` resolved
//! from configuration and a compact fmt layer writing to stderr.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with level filtering and formatted
/// output.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable, when set
/// 2. `config.trace_level`, when set
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, only the first call takes
/// effect. Observability is optional, so installation failures are ignored
/// rather than propagated.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}
