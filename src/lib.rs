//! Translation Relay - bidirectional zh/en text translation service
//!
//! This library provides a small HTTP relay that accepts short texts with a
//! direction flag and delegates the actual translation to an external
//! translation provider.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod server;

// Re-export key types for convenience
pub use crate::core::{
    client::Translator,
    config::RelayConfig,
    errors::RelayError,
    models::{Direction, TranslateRequest, TranslateResponse},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
