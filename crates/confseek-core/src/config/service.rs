//! Configuration service: provider resolution, caching and file discovery

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use super::error::{ConfigError, ConfigResult};
use super::options::ServiceOptions;
use super::paths::{default_config_path, expand_prefix, extension_of, LookupPaths};
use super::pool::{ExtensionRegistry, ProviderPool};
use super::resolved::ResolvedConfig;
use crate::logging::SharedLogger;
use crate::providers::{ConfigTree, FormatProvider, ProviderFactories, ProviderId};
use crate::{log_debug, log_info, log_warn};

/// Locates and parses configuration files
///
/// Build one per application and pass it to whoever needs configuration.
/// The extension registry is fixed at construction; providers are created on
/// first use and cached for the service's lifetime. The service is
/// `Send + Sync`: the cache is locked around its check-then-insert, so
/// concurrent callers never instantiate the same provider twice.
///
/// # Example
///
/// ```no_run
/// use confseek_core::config::ConfigService;
///
/// let service = ConfigService::new("myapp");
/// match service.load(None)? {
///     Some(config) => println!("db host: {}", config.get("db.host", "localhost")),
///     None => println!("no configuration found"),
/// }
/// # Ok::<(), confseek_core::config::ConfigError>(())
/// ```
pub struct ConfigService {
    app_name: String,
    pool: ProviderPool,
    extensions: ExtensionRegistry,
    factories: ProviderFactories,
    cache: Mutex<HashMap<ProviderId, Arc<dyn FormatProvider>>>,
    default_paths: Vec<PathBuf>,
    max_alias_depth: usize,
    logger: SharedLogger,
}

impl ConfigService {
    /// Service with default options for `app_name`
    pub fn new(app_name: impl Into<String>) -> Self {
        Self::with_options(ServiceOptions::new(app_name))
    }

    pub fn with_options(options: ServiceOptions) -> Self {
        let ServiceOptions {
            app_name,
            provider_pool,
            factories,
            logger,
            default_paths,
            max_alias_depth,
        } = options;

        let default_paths = match default_paths {
            Some(paths) => paths,
            None => match default_config_path(&app_name) {
                Some(path) => vec![path],
                None => {
                    log_warn!(logger, "Could not determine home directory; no default config path for '{}'", app_name);
                    Vec::new()
                }
            },
        };

        let extensions = Self::build_extension_registry(&provider_pool);
        log_debug!(logger, "Registered config extensions: {}", extensions.extensions().join(", "));

        Self {
            app_name,
            pool: provider_pool,
            extensions,
            factories,
            cache: Mutex::new(HashMap::new()),
            default_paths,
            max_alias_depth,
            logger,
        }
    }

    /// Flatten the pool into one entry per extension
    pub fn build_extension_registry(pool: &ProviderPool) -> ExtensionRegistry {
        ExtensionRegistry::from_pool(pool)
    }

    /// Search `explicit` (if given) and then the default candidates
    ///
    /// Returns the first file whose extension has a provider, parsed, or
    /// `Ok(None)` when no candidate yields one. Files with unknown extensions
    /// are logged and skipped; a parse failure of the chosen file is an error.
    pub fn load(&self, explicit: Option<&Path>) -> ConfigResult<Option<ResolvedConfig>> {
        self.load_from(explicit)
    }

    /// Like [`load`](Self::load) with several caller-supplied prefixes, tried
    /// in order before the defaults
    pub fn load_from<I, P>(&self, candidates: I) -> ConfigResult<Option<ResolvedConfig>>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let lookup = LookupPaths::new(candidates, &self.default_paths);
        self.search(&lookup)
    }

    fn search(&self, lookup: &LookupPaths) -> ConfigResult<Option<ResolvedConfig>> {
        for prefix in lookup {
            log_debug!(self.logger, "Looking for configuration at '{}*'", prefix.display());
            let files = match expand_prefix(prefix) {
                Ok(files) => files,
                Err(e) => {
                    log_warn!(self.logger, "Cannot list '{}': {}", prefix.display(), e);
                    continue;
                }
            };

            for file in files {
                let ext = extension_of(&file);
                if self.extensions.contains(&ext) {
                    log_info!(self.logger, "Loading configuration from '{}'...", file.display());
                    return self.parse_config_file(&file).map(Some);
                }
                log_warn!(
                    self.logger,
                    "Skipping configuration defined in '{}' since there isn't any provider that could parse this filetype.",
                    file.display()
                );
            }
        }

        log_debug!(self.logger, "No configuration found for '{}'", self.app_name);
        Ok(None)
    }

    /// Parse one file with the provider registered for its extension
    pub fn parse_config_file(&self, path: impl AsRef<Path>) -> ConfigResult<ResolvedConfig> {
        let path = path.as_ref();
        let provider = self.provider_for_file(path)?;
        let tree = provider.parse(path)?;
        Ok(ResolvedConfig::new(path, tree)?.with_max_alias_depth(self.max_alias_depth))
    }

    /// Parse in-memory `content` with the provider that `source_name`'s
    /// extension selects; `source_name` is never opened
    pub fn parse_text(&self, source_name: impl AsRef<Path>, content: &str) -> ConfigResult<ConfigTree> {
        let provider = self.provider_for_file(source_name.as_ref())?;
        Ok(provider.parse_text(content)?)
    }

    fn provider_for_file(&self, path: &Path) -> ConfigResult<Arc<dyn FormatProvider>> {
        let ext = extension_of(path);
        let id = self
            .extensions
            .get(&ext)
            .ok_or_else(|| ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: ext.clone(),
            })?;
        self.provider(id)
    }

    /// Cached provider for `id`, instantiated on first request
    pub fn provider(&self, id: &ProviderId) -> ConfigResult<Arc<dyn FormatProvider>> {
        let mut cache = self.cache.lock();
        if let Some(provider) = cache.get(id) {
            return Ok(Arc::clone(provider));
        }

        let provider = self
            .factories
            .create(id)
            .ok_or_else(|| ConfigError::UnknownProvider(id.clone()))?;
        log_debug!(self.logger, "Instantiated config provider '{}'", id);
        cache.insert(id.clone(), Arc::clone(&provider));
        Ok(provider)
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn pool(&self) -> &ProviderPool {
        &self.pool
    }

    pub fn extensions(&self) -> &ExtensionRegistry {
        &self.extensions
    }

    pub fn supports_extension(&self, extension: &str) -> bool {
        self.extensions.contains(extension)
    }

    /// Provider identifier registered for `extension`
    pub fn provider_id_for(&self, extension: &str) -> Option<&ProviderId> {
        self.extensions.get(extension)
    }

    /// Candidates searched after any caller-supplied prefix
    pub fn default_paths(&self) -> &[PathBuf] {
        &self.default_paths
    }

    /// Number of providers instantiated so far
    pub fn cached_providers(&self) -> usize {
        self.cache.lock().len()
    }
}

impl fmt::Debug for ConfigService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigService")
            .field("app_name", &self.app_name)
            .field("extensions", &self.extensions.extensions())
            .field("default_paths", &self.default_paths)
            .field("cached_providers", &self.cached_providers())
            .finish()
    }
}
