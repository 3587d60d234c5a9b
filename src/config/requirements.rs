//! Declarative set of keys the client SDK needs before it can initialise.

use super::source::ConfigSource;

pub const DEFAULT_CANONICAL_PREFIX: &str = "VITE_";
pub const DEFAULT_LEGACY_PREFIX: &str = "REACT_APP_";
pub const DEFAULT_SUFFIXES: &[&str] = &[
    "FIREBASE_API_KEY",
    "FIREBASE_AUTH_DOMAIN",
    "FIREBASE_PROJECT_ID",
];

const CANONICAL_PREFIX_VAR: &str = "SOBEK_CANONICAL_PREFIX";
const LEGACY_PREFIX_VAR: &str = "SOBEK_LEGACY_PREFIX";
const REQUIRED_KEYS_VAR: &str = "SOBEK_REQUIRED_KEYS";

/// A configuration value the application cannot run without.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredKey {
    pub canonical_name: String,
    pub fallback_name: String,
}

/// Prefix pair plus the logical key suffixes, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirements {
    pub canonical_prefix: String,
    pub legacy_prefix: String,
    pub suffixes: Vec<String>,
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            canonical_prefix: DEFAULT_CANONICAL_PREFIX.to_string(),
            legacy_prefix: DEFAULT_LEGACY_PREFIX.to_string(),
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Requirements {
    /// Defaults, with any `SOBEK_*` overrides present in `source` applied.
    ///
    /// `SOBEK_REQUIRED_KEYS` is a comma-separated suffix list; repeats are dropped
    /// (first occurrence kept) and an override with no usable entries keeps the
    /// default list.
    pub fn from_source(source: &impl ConfigSource) -> Self {
        let mut req = Self::default();
        if let Some(p) = source.non_empty(CANONICAL_PREFIX_VAR) {
            req.canonical_prefix = p;
        }
        if let Some(p) = source.non_empty(LEGACY_PREFIX_VAR) {
            req.legacy_prefix = p;
        }
        if let Some(list) = source.non_empty(REQUIRED_KEYS_VAR) {
            let mut suffixes: Vec<String> = Vec::new();
            for entry in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                if !suffixes.iter().any(|s| s == entry) {
                    suffixes.push(entry.to_string());
                }
            }
            if suffixes.is_empty() {
                tracing::warn!(
                    var = REQUIRED_KEYS_VAR,
                    "override has no entries, keeping defaults"
                );
            } else {
                req.suffixes = suffixes;
            }
        }
        req
    }

    /// One key per suffix. The legacy name swaps the leading canonical prefix for
    /// the legacy one; the suffix itself is never rewritten.
    pub fn keys(&self) -> Vec<RequiredKey> {
        self.suffixes
            .iter()
            .map(|suffix| RequiredKey {
                canonical_name: format!("{}{}", self.canonical_prefix, suffix),
                fallback_name: format!("{}{}", self.legacy_prefix, suffix),
            })
            .collect()
    }
}
