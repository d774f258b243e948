//! Provider error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while a format provider turns input into a tree
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content did not conform to the provider's format
    #[error("{provider} parse error: {message}")]
    Parse { provider: String, message: String },

    /// The provider does not implement the requested operation
    #[error("{provider} does not implement {operation}")]
    Unsupported {
        provider: String,
        operation: &'static str,
    },
}

impl ProviderError {
    /// Create a read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error
    pub fn parse(provider: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            provider: provider.into(),
            message: message.to_string(),
        }
    }

    /// Create an unsupported operation error
    pub fn unsupported(provider: impl Into<String>, operation: &'static str) -> Self {
        Self::Unsupported {
            provider: provider.into(),
            operation,
        }
    }

    /// True for failures caused by the input (unreadable or malformed),
    /// false for provider misconfiguration
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Parse { .. })
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ProviderError::parse("yaml", "did not find expected key");
        assert_eq!(err.to_string(), "yaml parse error: did not find expected key");
        assert!(err.is_parse_failure());

        let err = ProviderError::unsupported("ini", "parse_text");
        assert_eq!(err.to_string(), "ini does not implement parse_text");
        assert!(!err.is_parse_failure());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ProviderError::read("/tmp/config.yaml", io);
        assert!(err.to_string().starts_with("Failed to read /tmp/config.yaml"));
        assert!(err.is_parse_failure());
    }
}
