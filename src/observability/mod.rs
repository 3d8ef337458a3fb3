//! Tracing-based observability.
//!
//! This module wires the `tracing` macros used throughout the crate to a
//! subscriber with level filtering and formatted output. State transitions,
//! filter applications, fetch issuance and resolution, and discarded stale
//! generations all emit structured events through it.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! Initialize tracing once, early:
//!
//! ```rust
//! use catalist::observability::init_tracing;
//! use catalist::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("controller initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup

mod init;

pub use init::init_tracing;
