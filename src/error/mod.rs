//! Error handling module
//!
//! Defines the resolver's parse error and application errors with exit codes

pub mod types;

pub use types::*;
