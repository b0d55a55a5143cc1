//! Diagram-safe identifiers for resource keys.

use std::collections::HashMap;

use tracing::warn;

/// Characters PlantUML does not accept in a bare object name.
/// `"`, `$`, `'` and `_` are kept as they are.
const ALIAS_REPLACE_SET: &[char] = &[
    ' ', '!', '#', '%', '&', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<', '=', '>', '?',
    '@', '[', '\\', ']', '^', '`', '{', '|', '}', '~',
];

/// Replace every character of [`ALIAS_REPLACE_SET`] with `_`.
pub fn simplify(key: &str) -> String {
    key.chars()
        .map(|c| if ALIAS_REPLACE_SET.contains(&c) { '_' } else { c })
        .collect()
}

/// Two resource keys that ended up with the same alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasCollision {
    pub alias: String,
    pub first: String,
    pub second: String,
}

/// Per-document memo of resource key to alias.
///
/// Colliding keys keep the shared alias, so the diagram shows them as one
/// object. Each collision is logged and recorded, never resolved.
#[derive(Debug, Default)]
pub struct AliasTable {
    by_key: HashMap<String, String>,
    by_alias: HashMap<String, String>,
    collisions: Vec<AliasCollision>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias for `key`, computed on first use.
    pub fn alias(&mut self, key: &str) -> String {
        if let Some(alias) = self.by_key.get(key) {
            return alias.clone();
        }
        let alias = simplify(key);
        match self.by_alias.get(&alias) {
            Some(owner) if owner != key => {
                warn!("resources {owner} and {key} share the diagram alias {alias}");
                self.collisions.push(AliasCollision {
                    alias: alias.clone(),
                    first: owner.clone(),
                    second: key.to_string(),
                });
            }
            Some(_) => {}
            None => {
                self.by_alias.insert(alias.clone(), key.to_string());
            }
        }
        self.by_key.insert(key.to_string(), alias.clone());
        alias
    }

    /// Previously assigned alias, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.by_key.get(key).map(String::as_str)
    }

    pub fn collisions(&self) -> &[AliasCollision] {
        &self.collisions
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
