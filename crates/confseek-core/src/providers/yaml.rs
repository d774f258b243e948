//! YAML format provider

use serde_json::{Map, Number};
use serde_yaml::Value as YamlValue;

use super::error::{ProviderError, ProviderResult};
use super::traits::{ConfigTree, FormatProvider};

/// Identifier the YAML provider is registered under
pub const YAML_PROVIDER: &str = "yaml";

/// Parses YAML documents through `serde_yaml`
///
/// Merge keys (`<<: *base`) are applied first. The YAML tree is then
/// normalized into a [`ConfigTree`]: mapping keys become
/// strings, tags are dropped, and non-finite floats are kept as their
/// YAML spelling (`.inf`, `-.inf`, `.nan`).
///
/// ```
/// use confseek_core::providers::{FormatProvider, YamlProvider};
///
/// let tree = YamlProvider::new().parse_text("db:\n  port: 5432\n").unwrap();
/// assert_eq!(tree["db"]["port"], 5432);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlProvider;

impl YamlProvider {
    pub fn new() -> Self {
        Self
    }
}

impl FormatProvider for YamlProvider {
    fn name(&self) -> &str {
        YAML_PROVIDER
    }

    fn parse_text(&self, content: &str) -> ProviderResult<ConfigTree> {
        let mut value: YamlValue =
            serde_yaml::from_str(content).map_err(|e| ProviderError::parse(YAML_PROVIDER, e))?;
        // `<<: *anchor` entries are folded into their mapping
        value
            .apply_merge()
            .map_err(|e| ProviderError::parse(YAML_PROVIDER, e))?;
        Ok(to_tree(value))
    }
}

fn to_tree(value: YamlValue) -> ConfigTree {
    match value {
        YamlValue::Null => ConfigTree::Null,
        YamlValue::Bool(b) => ConfigTree::Bool(b),
        YamlValue::Number(n) => number_to_tree(&n),
        YamlValue::String(s) => ConfigTree::String(s),
        YamlValue::Sequence(seq) => ConfigTree::Array(seq.into_iter().map(to_tree).collect()),
        YamlValue::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                map.insert(key_to_string(key), to_tree(value));
            }
            ConfigTree::Object(map)
        }
        YamlValue::Tagged(tagged) => to_tree(tagged.value),
    }
}

fn number_to_tree(n: &serde_yaml::Number) -> ConfigTree {
    if let Some(i) = n.as_i64() {
        return ConfigTree::Number(i.into());
    }
    if let Some(u) = n.as_u64() {
        return ConfigTree::Number(u.into());
    }
    match n.as_f64().and_then(Number::from_f64) {
        Some(f) => ConfigTree::Number(f),
        None => ConfigTree::String(n.to_string()),
    }
}

fn key_to_string(key: YamlValue) -> String {
    match key {
        YamlValue::String(s) => s,
        YamlValue::Null => "null".to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Tagged(tagged) => key_to_string(tagged.value),
        // complex keys: fall back to their compact YAML rendering
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
