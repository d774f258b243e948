//! Provider pool and the flattened extension registry derived from it

use std::collections::HashMap;

use crate::providers::{ProviderId, YAML_PROVIDER};

/// Extension sets mapped to provider identifiers
///
/// Each entry's key lists one or more extensions separated by commas and/or
/// whitespace, e.g. `"yaml, yml"`. Entries keep insertion order; if two
/// entries claim the same extension the later one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderPool {
    entries: Vec<(String, ProviderId)>,
}

impl Default for ProviderPool {
    fn default() -> Self {
        Self::new().with("yaml, yml", YAML_PROVIDER)
    }
}

impl ProviderPool {
    /// An empty pool
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an entry
    pub fn with(mut self, extensions: impl Into<String>, provider: impl Into<ProviderId>) -> Self {
        self.entries.push((extensions.into(), provider.into()));
        self
    }

    pub fn entries(&self) -> &[(String, ProviderId)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ProviderPool
where
    K: Into<String>,
    V: Into<ProviderId>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// One extension per entry, pointing at its provider
///
/// Built once from a [`ProviderPool`] and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionRegistry {
    by_extension: HashMap<String, ProviderId>,
}

impl ExtensionRegistry {
    /// Flatten every extension set of `pool`
    ///
    /// ```
    /// use confseek_core::config::{ExtensionRegistry, ProviderPool};
    ///
    /// let pool = ProviderPool::new().with("yaml, yml", "P");
    /// let registry = ExtensionRegistry::from_pool(&pool);
    /// assert_eq!(registry.get("yml").map(|id| id.as_str()), Some("P"));
    /// ```
    pub fn from_pool(pool: &ProviderPool) -> Self {
        let mut by_extension = HashMap::new();
        for (extensions, provider) in pool.entries() {
            for ext in split_extensions(extensions) {
                by_extension.insert(ext.to_string(), provider.clone());
            }
        }
        Self { by_extension }
    }

    pub fn get(&self, extension: &str) -> Option<&ProviderId> {
        self.by_extension.get(extension)
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.by_extension.contains_key(extension)
    }

    /// Registered extensions, sorted
    pub fn extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.by_extension.keys().map(String::as_str).collect();
        exts.sort_unstable();
        exts
    }

    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }
}

fn split_extensions(extensions: &str) -> impl Iterator<Item = &str> {
    extensions
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|ext| !ext.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pool_is_yaml() {
        let registry = ExtensionRegistry::from_pool(&ProviderPool::default());
        assert_eq!(registry.extensions(), vec!["yaml", "yml"]);
        assert_eq!(registry.get("yaml"), Some(&ProviderId::new("yaml")));
        assert_eq!(registry.get("yml"), Some(&ProviderId::new("yaml")));
    }

    #[test]
    fn test_flattening_accepts_commas_and_spaces() {
        let pool = ProviderPool::new()
            .with("yaml, yml", "P")
            .with("json5 jsonc,json", "J")
            .with(" ini ,, ", "I");
        let registry = ExtensionRegistry::from_pool(&pool);

        assert_eq!(registry.len(), 6);
        for ext in ["yaml", "yml"] {
            assert_eq!(registry.get(ext).unwrap().as_str(), "P");
        }
        for ext in ["json5", "jsonc", "json"] {
            assert_eq!(registry.get(ext).unwrap().as_str(), "J");
        }
        assert_eq!(registry.get("ini").unwrap().as_str(), "I");
        assert!(!registry.contains(""));
    }

    #[test]
    fn test_last_write_wins() {
        let pool = ProviderPool::new().with("yaml, yml", "first").with("yml", "second");
        let registry = ExtensionRegistry::from_pool(&pool);
        assert_eq!(registry.get("yaml").unwrap().as_str(), "first");
        assert_eq!(registry.get("yml").unwrap().as_str(), "second");
    }

    #[test]
    fn test_pool_from_iterator() {
        let pool: ProviderPool = vec![("yaml, yml", "yaml"), ("ini", "ini")].into_iter().collect();
        assert_eq!(pool.entries().len(), 2);
        assert!(ExtensionRegistry::from_pool(&pool).contains("ini"));
        assert!(ProviderPool::new().is_empty());
    }

    #[test]
    fn test_extensions_are_case_sensitive() {
        let registry = ExtensionRegistry::from_pool(&ProviderPool::default());
        assert!(!registry.contains("YAML"));
    }
}
