//! Namespace table and IRI shortening.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::ontology::{BASE_PREFIX, DEFAULT_NAMESPACES};
use crate::error::ConfigError;

/// On-disk form of a namespace file: `{"prefix": "uri", ...}`.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct NamespaceFile(BTreeMap<String, String>);

/// Prefix to namespace URI mapping.
///
/// Entries iterate in prefix-name order, and [`shorten`](Self::shorten) uses
/// the first entry that matches. When two namespace URIs both prefix an IRI,
/// the one whose prefix name sorts first wins, not the longest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceTable {
    entries: BTreeMap<String, String>,
}

impl NamespaceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table used when no namespace file is available.
    pub fn builtin() -> Self {
        DEFAULT_NAMESPACES
            .iter()
            .map(|(prefix, uri)| (prefix.to_string(), uri.to_string()))
            .collect()
    }

    /// Read a JSON object of `prefix: uri` pairs.
    pub fn load_json(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: NamespaceFile =
            serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self { entries: file.0 })
    }

    /// Namespaces found in a document, with `defaults` filling the prefixes the
    /// document does not bind.
    pub fn merged(discovered: &BTreeMap<String, String>, defaults: &NamespaceTable) -> Self {
        let mut table = defaults.clone();
        for (prefix, uri) in discovered {
            table.insert(prefix, uri);
        }
        table
    }

    pub fn insert(&mut self, prefix: &str, uri: &str) {
        self.entries.insert(prefix.to_string(), uri.to_string());
    }

    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.entries.get(prefix).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, u)| (p.as_str(), u.as_str()))
    }

    /// Rewrite `uri` as `prefix:local` using the first namespace it starts
    /// with. The empty prefix is written as `base:`. Returns `uri` unchanged
    /// when nothing matches.
    pub fn shorten(&self, uri: &str) -> String {
        for (prefix, ns) in &self.entries {
            if ns.is_empty() {
                continue;
            }
            if let Some(local) = uri.strip_prefix(ns.as_str()) {
                let prefix = if prefix.is_empty() { BASE_PREFIX } else { prefix.as_str() };
                return format!("{prefix}:{local}");
            }
        }
        uri.to_string()
    }
}

impl FromIterator<(String, String)> for NamespaceTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
