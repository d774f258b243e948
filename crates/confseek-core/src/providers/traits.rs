//! Format provider trait definition

use std::fs;
use std::path::Path;

use super::error::{ProviderError, ProviderResult};

/// Generic configuration tree produced by every format provider
///
/// Mappings are string-keyed objects, sequences are arrays, and scalars are
/// strings, numbers, booleans or null.
pub type ConfigTree = serde_json::Value;

/// Capability for turning a file or a string into a [`ConfigTree`]
///
/// Only `name` is required. `parse_text` defaults to an `Unsupported` error,
/// and `parse` defaults to reading the file and handing it to `parse_text`.
/// A provider that cannot honour one of the operations must fail with
/// [`ProviderError::Unsupported`] rather than return an empty tree.
///
/// # Example
///
/// ```
/// use confseek_core::providers::{ConfigTree, FormatProvider, ProviderResult};
///
/// struct Lines;
///
/// impl FormatProvider for Lines {
///     fn name(&self) -> &str {
///         "lines"
///     }
///
///     fn parse_text(&self, content: &str) -> ProviderResult<ConfigTree> {
///         Ok(content.lines().collect::<Vec<_>>().into())
///     }
/// }
///
/// let tree = Lines.parse_text("a\nb").unwrap();
/// assert_eq!(tree[1], "b");
/// ```
pub trait FormatProvider: Send + Sync {
    /// Provider identifier, used in diagnostics
    fn name(&self) -> &str;

    /// Parse the file at `path`
    fn parse(&self, path: &Path) -> ProviderResult<ConfigTree> {
        let content = fs::read_to_string(path).map_err(|e| ProviderError::read(path, e))?;
        self.parse_text(&content)
    }

    /// Parse an in-memory string; never touches the filesystem
    fn parse_text(&self, _content: &str) -> ProviderResult<ConfigTree> {
        Err(ProviderError::unsupported(self.name(), "parse_text"))
    }
}
