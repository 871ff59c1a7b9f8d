use std::collections::HashMap;

use tracing::debug;

use crate::names::normalize;

/// In-memory mapping from canonical character name to nickname. Keys are
/// always stored in normalized form; the mutating and reading operations
/// normalize their name argument themselves, so callers may pass the raw
/// decorated strings the host hands out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagStore {
    tags: HashMap<String, String>,
}

impl TagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `nickname` under the canonical form of `name`, overwriting any
    /// previous tag. An empty trimmed nickname removes the entry instead.
    pub fn set_tag(&mut self, name: &str, nickname: &str) {
        let nickname = nickname.trim();
        if nickname.is_empty() {
            self.remove_tag(name);
            return;
        }
        let canonical = normalize(name);
        debug!(name = %canonical, nickname, "tagged player");
        self.tags.insert(canonical, nickname.to_owned());
    }

    /// No-op when the name is not tagged.
    pub fn remove_tag(&mut self, name: &str) {
        let canonical = normalize(name);
        if self.tags.remove(&canonical).is_some() {
            debug!(name = %canonical, "removed tag");
        }
    }

    pub fn nickname(&self, name: &str) -> Option<&str> {
        self.tags.get(&normalize(name)).map(String::as_str)
    }

    /// Load-path insertion; `name` must already be canonical.
    pub(crate) fn insert_raw(&mut self, name: String, nickname: String) {
        self.tags.insert(name, nickname);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(name, nick)| (name.as_str(), nick.as_str()))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
