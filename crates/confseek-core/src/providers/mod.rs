//! Format providers
//!
//! A provider turns a file or a string into a [`ConfigTree`]. The service
//! never knows about concrete formats: it looks providers up by
//! [`ProviderId`] in a [`ProviderFactories`] table and talks to them through
//! the [`FormatProvider`] trait.

mod traits;
mod error;
mod factory;
mod yaml;
mod json;
mod mock;

pub use traits::{ConfigTree, FormatProvider};
pub use error::{ProviderError, ProviderResult};
pub use factory::{ProviderDefinition, ProviderFactories, ProviderFactory, ProviderId};
pub use yaml::{YamlProvider, YAML_PROVIDER};
pub use json::{JsonProvider, JSON_PROVIDER};

// Mock provider for testing
pub use mock::{MockConfig, MockMode, MockProvider, MockSupport};
