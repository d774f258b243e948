//! Lookup path set and prefix expansion
//!
//! A candidate is a path prefix. `/home/me/.config/app/config` expands to every
//! regular file in `/home/me/.config/app` whose name starts with `config`,
//! the way the shell expands `config*`.

use std::fs;
use std::io;
use std::path::{is_separator, Path, PathBuf};

/// Default candidate for `app_name`: `<home>/.config/<app_name>/config.yaml`
///
/// Returns None when the home directory cannot be determined.
pub fn default_config_path(app_name: &str) -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join(app_name).join("config.yaml"))
}

/// Ordered candidate prefixes; the first one yielding a usable file wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupPaths {
    candidates: Vec<PathBuf>,
}

impl LookupPaths {
    /// Caller-supplied prefixes first, then the defaults
    pub fn new<I, P>(explicit: I, defaults: &[PathBuf]) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut candidates: Vec<PathBuf> = explicit.into_iter().map(Into::into).collect();
        candidates.extend(defaults.iter().cloned());
        Self { candidates }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl<'a> IntoIterator for &'a LookupPaths {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Directory to list, path the matches are joined onto, and file-name prefix
fn split_prefix(prefix: &Path) -> (PathBuf, PathBuf, String) {
    let raw = prefix.to_string_lossy();
    if raw.ends_with(is_separator) {
        return (prefix.to_path_buf(), prefix.to_path_buf(), String::new());
    }
    match prefix.file_name() {
        Some(name) => {
            let base = prefix.parent().map(Path::to_path_buf).unwrap_or_default();
            let dir = if base.as_os_str().is_empty() {
                PathBuf::from(".")
            } else {
                base.clone()
            };
            (dir, base, name.to_string_lossy().into_owned())
        }
        None => (prefix.to_path_buf(), prefix.to_path_buf(), String::new()),
    }
}

/// Expand `prefix*` into matching regular files, sorted by path
///
/// A prefix ending in a separator lists the directory itself; dotfiles are
/// then skipped, as with `dir/*`. A missing directory yields no matches, and
/// unreadable entries are skipped. Glob metacharacters in `prefix` are taken
/// literally. Matches keep the prefix's form: `config` yields `config.yaml`,
/// `/etc/app/config` yields `/etc/app/config.yaml`.
pub fn expand_prefix(prefix: &Path) -> io::Result<Vec<PathBuf>> {
    let (dir, base, name_prefix) = split_prefix(prefix);

    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        // the prefix's parent is a plain file
        Err(_) if dir.is_file() => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut matches = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();
        if name_prefix.is_empty() && name.starts_with('.') {
            continue;
        }
        if !name.starts_with(name_prefix.as_str()) {
            continue;
        }
        let path = base.join(&file_name);
        if entry.path().is_file() {
            matches.push(path);
        }
    }
    matches.sort();
    Ok(matches)
}

/// Final dot-delimited suffix of the file name
///
/// `config.yaml` -> `yaml`, `config.yaml.bak` -> `bak`, `.yml` -> `yml`.
/// A name without a dot is returned whole, so it only matches an extension
/// registered under that exact name.
pub fn extension_of(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.rsplit('.').next().unwrap_or_default().to_string()
}
