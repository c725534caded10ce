//! Errors from loading, saving and validating a [`Config`](crate::Config).
//!
//! The persistence functions return `anyhow::Result`; downcast to
//! [`ConfigError`] to tell the cases apart.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid YAML in config file: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field holds a value serde accepted but the surface cannot use.
    #[error("invalid config value: {0}")]
    Validation(String),
}
