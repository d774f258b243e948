//! Mock provider for testing
//!
//! Returns a deterministic tree without looking at its input, and counts how
//! often it is asked to parse. Useful for exercising the service's provider
//! cache and for hosts that want to stub out a format in their own tests.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::error::{ProviderError, ProviderResult};
use super::traits::{ConfigTree, FormatProvider};

/// What the mock hands back
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Return a fixed tree
    Fixed(ConfigTree),
    /// Fail with a parse error carrying this message
    Error(String),
}

impl Default for MockMode {
    fn default() -> Self {
        MockMode::Fixed(ConfigTree::Object(Default::default()))
    }
}

/// Which operations the mock claims to implement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MockSupport {
    #[default]
    Both,
    FileOnly,
    TextOnly,
}

/// Configuration for the mock provider
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub name: String,
    pub mode: MockMode,
    pub support: MockSupport,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            name: "mock".to_string(),
            mode: MockMode::default(),
            support: MockSupport::Both,
        }
    }
}

/// Mock format provider
#[derive(Debug, Default)]
pub struct MockProvider {
    config: MockConfig,
    calls: AtomicUsize,
}

impl MockProvider {
    /// Create a mock returning an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with specific config
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            config,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock that always returns `tree`
    pub fn fixed(tree: ConfigTree) -> Self {
        Self::with_config(MockConfig {
            mode: MockMode::Fixed(tree),
            ..Default::default()
        })
    }

    /// Create a mock that always fails to parse
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_config(MockConfig {
            mode: MockMode::Error(message.into()),
            ..Default::default()
        })
    }

    /// Restrict the operations this mock implements
    pub fn with_support(mut self, support: MockSupport) -> Self {
        self.config.support = support;
        self
    }

    /// Number of parse calls served so far, successful or not
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn respond(&self) -> ProviderResult<ConfigTree> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.config.mode {
            MockMode::Fixed(tree) => Ok(tree.clone()),
            MockMode::Error(message) => Err(ProviderError::parse(&self.config.name, message)),
        }
    }
}

impl FormatProvider for MockProvider {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn parse(&self, _path: &Path) -> ProviderResult<ConfigTree> {
        if self.config.support == MockSupport::TextOnly {
            return Err(ProviderError::unsupported(self.name(), "parse"));
        }
        self.respond()
    }

    fn parse_text(&self, _content: &str) -> ProviderResult<ConfigTree> {
        if self.config.support == MockSupport::FileOnly {
            return Err(ProviderError::unsupported(self.name(), "parse_text"));
        }
        self.respond()
    }
}
