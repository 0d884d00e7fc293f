// hwbridge Library - Public API

// Re-export error types
pub mod error;
pub use error::{BridgeError, Result};

// Module declarations
pub mod core;
pub mod platform;

// Re-export commonly used types
pub use crate::core::bridge::{Bridge, Snapshot, StopReason};

// Initialize logging
//
// Logs go to stderr only: stdout carries the snapshot stream.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();
}
