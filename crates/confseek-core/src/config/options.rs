//! Construction options for [`ConfigService`](super::ConfigService)

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use super::pool::ProviderPool;
use super::resolved::DEFAULT_MAX_ALIAS_DEPTH;
use crate::logging::{NoOpLogger, SharedLogger};
use crate::providers::ProviderFactories;

/// Everything a configuration service is built from
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use confseek_core::config::{ConfigService, ProviderPool, ServiceOptions};
/// use confseek_core::logging::ConsoleLogger;
///
/// let options = ServiceOptions::new("myapp")
///     .with_provider_pool(ProviderPool::default().with("json", "json"))
///     .with_logger(Arc::new(ConsoleLogger::new()))
///     .with_max_alias_depth(4);
///
/// let service = ConfigService::with_options(options);
/// assert!(service.supports_extension("json"));
/// ```
pub struct ServiceOptions {
    /// Application name used in the default lookup path
    pub app_name: String,
    /// Extension sets mapped to provider identifiers
    pub provider_pool: ProviderPool,
    /// Constructors for every identifier the pool may name
    pub factories: ProviderFactories,
    /// Destination for load diagnostics
    pub logger: SharedLogger,
    /// Replaces the home-derived default candidates when set
    pub default_paths: Option<Vec<PathBuf>>,
    /// Alias hops followed by lookups on loaded configs
    pub max_alias_depth: usize,
}

impl ServiceOptions {
    /// Defaults: YAML pool, built-in factories, silent logger,
    /// `<home>/.config/<app_name>/config.yaml` as the only default candidate
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            provider_pool: ProviderPool::default(),
            factories: ProviderFactories::builtin(),
            logger: Arc::new(NoOpLogger::new()),
            default_paths: None,
            max_alias_depth: DEFAULT_MAX_ALIAS_DEPTH,
        }
    }

    pub fn with_provider_pool(mut self, pool: ProviderPool) -> Self {
        self.provider_pool = pool;
        self
    }

    pub fn with_factories(mut self, factories: ProviderFactories) -> Self {
        self.factories = factories;
        self
    }

    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Search these prefixes after any caller-supplied one instead of the
    /// home-derived default. An empty list disables default lookup.
    pub fn with_default_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.default_paths = Some(paths.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_max_alias_depth(mut self, depth: usize) -> Self {
        self.max_alias_depth = depth;
        self
    }
}

impl fmt::Debug for ServiceOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceOptions")
            .field("app_name", &self.app_name)
            .field("provider_pool", &self.provider_pool)
            .field("factories", &self.factories)
            .field("default_paths", &self.default_paths)
            .field("max_alias_depth", &self.max_alias_depth)
            .finish()
    }
}
