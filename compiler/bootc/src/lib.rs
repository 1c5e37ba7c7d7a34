//! Bootstrap generator driver.
//!
//! Loads a JSON container snapshot, runs [`boot_codegen::Generator`], renders
//! diagnostics and writes the generated units below an output directory.
//!
//! # Debugging
//!
//! - `RUST_LOG=boot_codegen=debug`: one event per entity plan and skip.
//! - `RUST_LOG=boot_codegen::listener=trace`: every listener scan.

use std::sync::Once;

pub mod commands;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output. Safe to call more than once.
///
/// Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
