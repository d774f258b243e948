//! Errors raised by the configuration service

use std::path::PathBuf;

use thiserror::Error;

use crate::providers::{ProviderError, ProviderId};

/// Errors that can occur while locating or parsing configuration files
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No provider is registered for the file's extension
    #[error("No provider can parse '{}' (extension '{extension}')", .path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// The pool names a provider that has no factory
    #[error("Provider '{0}' is not registered")]
    UnknownProvider(ProviderId),

    /// A resolved configuration was built for a file that does not exist
    #[error("Config file {} doesn't exist", .0.display())]
    MissingFile(PathBuf),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl ConfigError {
    /// True when the underlying provider failed to read or parse its input
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Provider(e) if e.is_parse_failure())
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Why a strict lookup produced no value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Key not found: {key}")]
    Missing { key: String },

    #[error("Alias chain starting at '{key}' exceeds {depth} hops")]
    AliasDepthExceeded { key: String, depth: usize },
}
