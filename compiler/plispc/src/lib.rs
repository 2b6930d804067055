//! Plispc - the plisp read-eval-print loop.
//!
//! `main.rs` only collects arguments and picks a mode; everything it drives
//! lives here so it can be tested against a capturing output sink.
//!
//! # Debugging
//!
//! Enable tracing with environment variables:
//! - `RUST_LOG=plisp_eval=debug` - builtin applications and definitions
//! - `RUST_LOG=plisp_eval=trace` - every s-expression reduction (very verbose)

pub mod config;
pub mod print_handler;
pub mod repl;

use std::sync::Once;

pub use config::{parse_args, ArgError, Mode, ReplConfig, USAGE};
pub use print_handler::{BufferPrintHandler, PrintHandlerImpl};
pub use repl::{Outcome, Repl};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
