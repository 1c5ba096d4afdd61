//! Command-line interface module
//!
//! Handles argument parsing and output rendering

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
