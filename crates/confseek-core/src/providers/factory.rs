//! Provider factory table: provider identifier -> constructor

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::json::{JsonProvider, JSON_PROVIDER};
use super::traits::FormatProvider;
use super::yaml::{YamlProvider, YAML_PROVIDER};

/// Stable name of one provider implementation
///
/// Only ever compared and hashed; never parsed for meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProviderId(String);

impl ProviderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProviderId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProviderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Factory function type for creating format providers
pub type ProviderFactory = Box<dyn Fn() -> Arc<dyn FormatProvider> + Send + Sync>;

/// Definition of a registered provider
pub struct ProviderDefinition {
    /// Identifier the pool refers to
    pub id: ProviderId,
    /// Human-readable description
    pub description: String,
    /// Factory function to create instances
    pub factory: ProviderFactory,
}

impl fmt::Debug for ProviderDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderDefinition")
            .field("id", &self.id)
            .field("description", &self.description)
            .finish()
    }
}

/// Table of provider constructors owned by one configuration service
///
/// The service only instantiates providers through this table, so every
/// identifier used in a provider pool needs an entry here.
///
/// # Example
///
/// ```
/// use confseek_core::providers::{MockProvider, ProviderFactories};
///
/// let mut factories = ProviderFactories::builtin();
/// factories.register("ini", "Stub INI parser", MockProvider::new);
///
/// assert!(factories.contains(&"yaml".into()));
/// assert!(factories.create(&"ini".into()).is_some());
/// ```
#[derive(Debug, Default)]
pub struct ProviderFactories {
    definitions: HashMap<ProviderId, ProviderDefinition>,
}

impl ProviderFactories {
    /// An empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with the built-in YAML and JSON providers
    pub fn builtin() -> Self {
        let mut factories = Self::new();
        factories.register(YAML_PROVIDER, "YAML documents via serde_yaml", YamlProvider::new);
        factories.register(JSON_PROVIDER, "JSON documents via serde_json", JsonProvider::new);
        factories
    }

    /// Register (or replace) the constructor for `id`
    pub fn register<F, P>(&mut self, id: impl Into<ProviderId>, description: &str, factory: F) -> &mut Self
    where
        F: Fn() -> P + Send + Sync + 'static,
        P: FormatProvider + 'static,
    {
        let factory: ProviderFactory = Box::new(move || Arc::new(factory()) as Arc<dyn FormatProvider>);
        self.register_boxed(id, description, factory)
    }

    /// Register an already boxed factory, e.g. one handing out a shared instance
    pub fn register_boxed(
        &mut self,
        id: impl Into<ProviderId>,
        description: &str,
        factory: ProviderFactory,
    ) -> &mut Self {
        let id = id.into();
        self.definitions.insert(
            id.clone(),
            ProviderDefinition {
                id,
                description: description.to_string(),
                factory,
            },
        );
        self
    }

    /// Builder-style variant of [`register`](Self::register)
    pub fn with<F, P>(mut self, id: impl Into<ProviderId>, description: &str, factory: F) -> Self
    where
        F: Fn() -> P + Send + Sync + 'static,
        P: FormatProvider + 'static,
    {
        self.register(id, description, factory);
        self
    }

    /// Remove a registration
    pub fn unregister(&mut self, id: &ProviderId) -> bool {
        self.definitions.remove(id).is_some()
    }

    /// Build a fresh provider instance, or None if `id` is not registered
    pub fn create(&self, id: &ProviderId) -> Option<Arc<dyn FormatProvider>> {
        self.definitions.get(id).map(|def| (def.factory)())
    }

    pub fn contains(&self, id: &ProviderId) -> bool {
        self.definitions.contains_key(id)
    }

    /// All registrations as (id, description), sorted by id
    pub fn list(&self) -> Vec<(ProviderId, String)> {
        let mut entries: Vec<_> = self
            .definitions
            .values()
            .map(|def| (def.id.clone(), def.description.clone()))
            .collect();
        entries.sort();
        entries
    }
}
