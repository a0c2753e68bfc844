//! # Media Tidy
//!
//! Two small tools for keeping photo folders in order.
//!
//! - **compare** - lists the files of a source tree whose exact content also
//!   exists somewhere in a target tree. Nothing is deleted.
//! - **sort** - moves photos and videos into `<root>/<YYYY>[/<MM>]` folders,
//!   dating each file from its name (`IMG-20230405-WA0001.jpg`) or, failing
//!   that, from its EXIF capture time.
//!
//! ## Architecture
//! - `core` - Walking, hashing, matching, date resolution and routing
//! - `events` - Typed progress events; the only channel for log output
//! - `error` - Error types
//! - `cli` (binary only) - Command-line interface

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use error::{Result, TidyError};

/// Initialize tracing for the binary.
///
/// Logs at `info` (or `debug` when `verbose`) unless `RUST_LOG` says
/// otherwise.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}
