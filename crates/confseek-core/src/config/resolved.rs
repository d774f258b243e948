//! Parsed configuration with dotted-key lookup

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;

use super::error::{ConfigError, ConfigResult, LookupError};
use crate::providers::ConfigTree;

/// Alias hops followed before a lookup gives up
pub const DEFAULT_MAX_ALIAS_DEPTH: usize = 16;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"%(.+)%").expect("regex"));

/// One parsed configuration file
///
/// Holds the tree a provider produced and the path it came from. Values are
/// addressed by dotted keys (`database.host`). A string value containing
/// `%other.key%` is an alias: the lookup continues at `other.key` and the
/// aliased value replaces the whole string, including any text around the
/// placeholder. Only the first placeholder in a string counts, and the match
/// is greedy, so `%a%-%b%` aliases the key `a%-%b`.
///
/// # Example
///
/// ```no_run
/// use confseek_core::config::ResolvedConfig;
/// use serde_json::json;
///
/// let config = ResolvedConfig::new(
///     "/etc/app/config.yaml",
///     json!({"db": {"host": "localhost"}, "alias": "%db.host%"}),
/// )?;
///
/// assert_eq!(config.get("alias", ()), json!("localhost"));
/// assert_eq!(config.get("missing.key", "fallback-val"), json!("fallback-val"));
/// # Ok::<(), confseek_core::config::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    path: PathBuf,
    tree: ConfigTree,
    max_alias_depth: usize,
}

impl ResolvedConfig {
    /// Wrap `tree`, parsed from `path`
    ///
    /// Fails with [`ConfigError::MissingFile`] if `path` does not exist.
    pub fn new(path: impl Into<PathBuf>, tree: ConfigTree) -> ConfigResult<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(ConfigError::MissingFile(path));
        }
        Ok(Self {
            path,
            tree,
            max_alias_depth: DEFAULT_MAX_ALIAS_DEPTH,
        })
    }

    /// Change how many alias hops a lookup may follow
    pub fn with_max_alias_depth(mut self, depth: usize) -> Self {
        self.max_alias_depth = depth;
        self
    }

    /// Source file path as it was found, not canonicalized
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tree(&self) -> &ConfigTree {
        &self.tree
    }

    pub fn into_tree(self) -> ConfigTree {
        self.tree
    }

    pub fn max_alias_depth(&self) -> usize {
        self.max_alias_depth
    }

    /// Value at `key`, or `fallback` when the key (or an alias it points to)
    /// is missing or the alias chain is too long
    ///
    /// Pass `()` for a null fallback.
    pub fn get(&self, key: &str, fallback: impl Into<ConfigTree>) -> ConfigTree {
        match self.get_opt(key) {
            Some(value) => value.clone(),
            None => fallback.into(),
        }
    }

    /// Value at `key`, or None
    pub fn get_opt(&self, key: &str) -> Option<&ConfigTree> {
        self.try_get(key).ok()
    }

    /// Value at `key`, reporting why the lookup failed
    pub fn try_get(&self, key: &str) -> Result<&ConfigTree, LookupError> {
        let mut current = key;
        for _ in 0..=self.max_alias_depth {
            let value = self.descend(current).ok_or_else(|| LookupError::Missing {
                key: current.to_string(),
            })?;
            match alias_target(value) {
                Some(target) => current = target,
                None => return Ok(value),
            }
        }
        Err(LookupError::AliasDepthExceeded {
            key: key.to_string(),
            depth: self.max_alias_depth,
        })
    }

    /// String value at `key`
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get_opt(key).and_then(ConfigTree::as_str)
    }

    /// Value at `key` deserialized into `T`; None if missing or of the wrong shape
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get_opt(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get_opt(key).is_some()
    }

    fn descend(&self, key: &str) -> Option<&ConfigTree> {
        key.split('.')
            .try_fold(&self.tree, |node, fragment| node.as_object()?.get(fragment))
    }
}

fn alias_target(value: &ConfigTree) -> Option<&str> {
    let text = value.as_str()?;
    PLACEHOLDER
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use tempfile::NamedTempFile;

    fn config(tree: ConfigTree) -> (NamedTempFile, ResolvedConfig) {
        let file = NamedTempFile::new().unwrap();
        let config = ResolvedConfig::new(file.path(), tree).unwrap();
        (file, config)
    }

    #[test]
    fn test_new_requires_existing_file() {
        let err = ResolvedConfig::new("/definitely/not/here.yaml", json!({})).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(ref p) if p.ends_with("here.yaml")));
    }

    #[test]
    fn test_present_keys_ignore_fallback() {
        let (_f, cfg) = config(json!({
            "db": {"host": "localhost", "port": 5432, "tls": false},
            "tags": ["a", "b"],
            "nothing": null
        }));

        assert_eq!(cfg.get("db.host", "fb"), json!("localhost"));
        assert_eq!(cfg.get("db.port", "fb"), json!(5432));
        assert_eq!(cfg.get("db.tls", true), json!(false));
        assert_eq!(cfg.get("tags", "fb"), json!(["a", "b"]));
        assert_eq!(cfg.get("db", "fb"), json!({"host": "localhost", "port": 5432, "tls": false}));
        // a stored null is a value, not a miss
        assert_eq!(cfg.get("nothing", "fb"), ConfigTree::Null);
    }

    #[test]
    fn test_absent_keys_return_fallback() {
        let (_f, cfg) = config(json!({"db": {"host": "localhost"}, "tags": ["a"], "n": 3}));

        assert_eq!(cfg.get("missing", "fb"), json!("fb"));
        assert_eq!(cfg.get("missing.key", "fallback-val"), json!("fallback-val"));
        assert_eq!(cfg.get("db.user", 7), json!(7));
        assert_eq!(cfg.get("db.host.deeper", "fb"), json!("fb"));
        assert_eq!(cfg.get("tags.0", "fb"), json!("fb"));
        assert_eq!(cfg.get("n.x", "fb"), json!("fb"));
        assert_eq!(cfg.get("", "fb"), json!("fb"));
        assert_eq!(cfg.get("db.", "fb"), json!("fb"));
        assert_eq!(cfg.get("missing", ()), ConfigTree::Null);
    }

    #[test]
    fn test_non_mapping_root() {
        let (_f, cfg) = config(ConfigTree::Null);
        assert_eq!(cfg.get("anything", "fb"), json!("fb"));

        let (_f, cfg) = config(json!(["x"]));
        assert!(cfg.get_opt("0").is_none());
    }

    #[test]
    fn test_alias_resolves() {
        let (_f, cfg) = config(json!({"a": "%b%", "b": "hello"}));
        assert_eq!(cfg.get("a", ()), json!("hello"));
    }

    #[test]
    fn test_alias_chain_resolves_transitively() {
        let (_f, cfg) = config(json!({
            "first": "%second%",
            "second": "%nested.third%",
            "nested": {"third": {"port": 80}}
        }));
        assert_eq!(cfg.get("first", ()), json!({"port": 80}));
        assert_eq!(cfg.get_as::<u16>("first.port"), None);
        assert_eq!(cfg.get_as::<u16>("nested.third.port"), Some(80));
    }

    #[test]
    fn test_alias_to_missing_key_uses_fallback() {
        let (_f, cfg) = config(json!({"a": "%nowhere%"}));
        assert_eq!(cfg.get("a", "fb"), json!("fb"));
        assert_eq!(
            cfg.try_get("a"),
            Err(LookupError::Missing { key: "nowhere".to_string() })
        );
    }

    #[test]
    fn test_partial_placeholder_replaces_whole_value() {
        let (_f, cfg) = config(json!({"url": "http://%host%:80", "host": "example.com"}));
        assert_eq!(cfg.get("url", ()), json!("example.com"));
    }

    #[test]
    fn test_placeholder_match_is_greedy() {
        let (_f, cfg) = config(json!({"v": "%a%-%b%", "a%-%b": "odd", "a": "x"}));
        assert_eq!(cfg.get("v", ()), json!("odd"));
    }

    #[test]
    fn test_lone_percent_signs_are_literal() {
        let (_f, cfg) = config(json!({"pct": "50%", "empty": "%%", "split": "%a\nb%"}));
        assert_eq!(cfg.get("pct", ()), json!("50%"));
        assert_eq!(cfg.get("empty", ()), json!("%%"));
        assert_eq!(cfg.get("split", ()), json!("%a\nb%"));
    }

    #[test]
    fn test_alias_cycle_falls_back() {
        let (_f, cfg) = config(json!({"a": "%b%", "b": "%a%", "self": "%self%"}));

        assert_eq!(cfg.get("a", "fb"), json!("fb"));
        assert_eq!(cfg.get("self", "fb"), json!("fb"));
        assert_eq!(
            cfg.try_get("a"),
            Err(LookupError::AliasDepthExceeded {
                key: "a".to_string(),
                depth: DEFAULT_MAX_ALIAS_DEPTH
            })
        );
    }

    #[test]
    fn test_alias_depth_limit_is_exact() {
        let (_f, cfg) = config(json!({"a": "%b%", "b": "%c%", "c": "end"}));
        let cfg = cfg.with_max_alias_depth(2);
        assert_eq!(cfg.get_str("a"), Some("end"));

        let cfg = cfg.with_max_alias_depth(1);
        assert!(matches!(
            cfg.try_get("a"),
            Err(LookupError::AliasDepthExceeded { depth: 1, .. })
        ));
        assert_eq!(cfg.get_str("b"), Some("end"));

        let cfg = cfg.with_max_alias_depth(0);
        assert_eq!(cfg.get_str("c"), Some("end"));
        assert!(!cfg.contains("b"));
    }

    #[test]
    fn test_typed_access() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Db {
            host: String,
            port: u16,
        }

        let (_f, cfg) = config(json!({"db": {"host": "h", "port": 1}, "alias": "%db%"}));
        assert_eq!(
            cfg.get_as::<Db>("alias"),
            Some(Db { host: "h".to_string(), port: 1 })
        );
        assert_eq!(cfg.get_as::<u16>("db.host"), None);
        assert_eq!(cfg.get_str("db.port"), None);
        assert!(cfg.contains("db.host"));
    }

    #[test]
    fn test_accessors() {
        let (file, cfg) = config(json!({"k": 1}));
        assert_eq!(cfg.path(), file.path());
        assert_eq!(cfg.tree(), &json!({"k": 1}));
        assert_eq!(cfg.max_alias_depth(), DEFAULT_MAX_ALIAS_DEPTH);
        assert_eq!(cfg.into_tree(), json!({"k": 1}));
    }
}
