//! Error types for level parsing and environment configuration

use thiserror::Error;

/// A string did not name a known log level
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level {input:?}")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The rejected input
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Errors raised while reading logger options from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The level variable held something other than a level label
    #[error("invalid value for {var}")]
    InvalidLevel {
        var: &'static str,
        #[source]
        source: ParseLevelError,
    },
}
