//! Read-only key/value lookups the configuration layer reads from.

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A configuration store: the process environment in production, a map in tests.
pub trait ConfigSource {
    /// Raw value for `key`, if set. Empty strings are returned as-is.
    fn get(&self, key: &str) -> Option<String>;

    /// Value for `key` only when it is set and non-empty.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty())
    }
}

/// The process environment. Values that are not valid UTF-8 count as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// In-memory source.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self { Self::default() }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl ConfigSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl<S: ConfigSource + ?Sized> ConfigSource for Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Load `.env.local` then `.env` from `dir` into the process environment and
/// return the files that were read.
///
/// Missing files are skipped; a file that exists but does not parse is an error.
/// Variables already set are left untouched, so the first file wins over the
/// second and the real environment wins over both.
pub fn load_dotenv(dir: &Path) -> Result<Vec<PathBuf>, dotenvy::Error> {
    let mut loaded = Vec::new();
    for name in [".env.local", ".env"] {
        let path = dir.join(name);
        match dotenvy::from_path(&path) {
            Ok(()) => loaded.push(path),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e),
        }
    }
    Ok(loaded)
}
