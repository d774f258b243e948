//! confseek core
//!
//! Finds a configuration file among prioritized candidate locations, parses
//! it with the format provider registered for its extension, and answers
//! dotted-key lookups with `%key%` aliasing.
//!
//! ```rust,ignore
//! use confseek_core::config::{ConfigService, ProviderPool, ServiceOptions};
//!
//! let service = ConfigService::with_options(
//!     ServiceOptions::new("myapp")
//!         .with_provider_pool(ProviderPool::default().with("json", "json")),
//! );
//!
//! // ./myapp.yaml, ./myapp.json, ... then ~/.config/myapp/config.yaml
//! if let Some(config) = service.load(Some(Path::new("./myapp")))? {
//!     let host = config.get("database.host", "localhost");
//! }
//! ```

pub mod logging;
pub mod providers;
pub mod config;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigResult, ConfigService, ExtensionRegistry, LookupError, ProviderPool,
    ResolvedConfig, ServiceOptions,
};

pub use providers::{
    ConfigTree, FormatProvider, JsonProvider, ProviderError, ProviderFactories, ProviderId,
    ProviderResult, YamlProvider,
};

pub use logging::{ConsoleLogger, Logger, MemoryLogger, NoOpLogger, SharedLogger};
