//! Monkey command-line driver.
//!
//! The `monkey` binary is a thin shell over [`commands`]; everything it does
//! is reachable from here so it can be tested without spawning a process.

pub mod commands;
mod error;

use std::sync::Once;

pub use error::DriverError;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber.
///
/// Only takes effect when `RUST_LOG` is set, e.g.
/// `RUST_LOG=monkey_eval=debug monkey run script.mk`. Safe to call more
/// than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
