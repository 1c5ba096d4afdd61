//! Custom error types with exit codes

use std::str::Utf8Error;
use thiserror::Error;

/// Error raised when a configuration document cannot be resolved into a `Config`
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseError {
    /// Malformed document, or a recognized key holding a value of the wrong kind
    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// The document is not valid UTF-8
    #[error("configuration is not valid UTF-8: {0}")]
    Encoding(#[from] Utf8Error),

    /// A recognized key holds a value of the right kind but out of range
    #[error("invalid value for `{key}`: {message}")]
    InvalidValue { key: String, message: String },
}

impl ParseError {
    /// Create an invalid value error
    #[inline]
    pub fn invalid_value<K: Into<String>, S: Into<String>>(key: K, message: S) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Main error type for slipbox operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SlipboxError {
    /// Configuration Error - invalid configuration document or CLI override
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Notebook Error - no notebook found, or a path outside of it
    #[error("Notebook error: {message}")]
    Notebook { message: String },

    /// Filesystem Error - file operation failed
    #[error("Filesystem error: {message}")]
    Filesystem { message: String },
}

impl SlipboxError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::Notebook { .. } => 2,
            Self::Filesystem { .. } => 3,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a notebook error
    #[inline]
    pub fn notebook<S: Into<String>>(message: S) -> Self {
        Self::Notebook {
            message: message.into(),
        }
    }

    /// Create a filesystem error
    #[inline]
    pub fn filesystem<S: Into<String>>(message: S) -> Self {
        Self::Filesystem {
            message: message.into(),
        }
    }
}

impl From<ParseError> for SlipboxError {
    fn from(err: ParseError) -> Self {
        Self::configuration(err.to_string())
    }
}
