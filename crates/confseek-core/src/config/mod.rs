//! Configuration discovery and lookup
//!
//! - `ConfigService`: owns the provider pool, factories and provider cache,
//!   and searches candidate paths
//! - `ResolvedConfig`: one parsed file, queried by dotted key
//! - `ProviderPool` / `ExtensionRegistry`: extension to provider mapping

mod error;
mod options;
mod paths;
mod pool;
mod resolved;
mod service;

pub use error::{ConfigError, ConfigResult, LookupError};
pub use options::ServiceOptions;
pub use paths::{default_config_path, expand_prefix, extension_of, LookupPaths};
pub use pool::{ExtensionRegistry, ProviderPool};
pub use resolved::{ResolvedConfig, DEFAULT_MAX_ALIAS_DEPTH};
pub use service::ConfigService;
