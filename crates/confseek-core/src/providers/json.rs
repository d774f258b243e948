//! JSON format provider

use super::error::{ProviderError, ProviderResult};
use super::traits::{ConfigTree, FormatProvider};

/// Identifier the JSON provider is registered under
pub const JSON_PROVIDER: &str = "json";

/// Parses JSON documents through `serde_json`
///
/// Registered as a factory by default but not part of the default pool;
/// add `"json"` to the pool to pick up `config.json` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonProvider;

impl JsonProvider {
    pub fn new() -> Self {
        Self
    }
}

impl FormatProvider for JsonProvider {
    fn name(&self) -> &str {
        JSON_PROVIDER
    }

    fn parse_text(&self, content: &str) -> ProviderResult<ConfigTree> {
        serde_json::from_str(content).map_err(|e| ProviderError::parse(JSON_PROVIDER, e))
    }
}
