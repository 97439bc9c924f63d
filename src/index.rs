//! Reverse lookup from alias to catalog entry.
//!
//! The index holds positions into the catalog rather than copies of the
//! entries. A collision fails the build instead of letting the later entry
//! win, so resolution never depends on the order aliases were inserted.

use crate::catalog::{Emoji, EmojiCatalog};
use crate::error::{Result, StatusError};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    by_alias: HashMap<String, usize>,
}

impl AliasIndex {
    pub fn build(catalog: &EmojiCatalog) -> Result<Self> {
        Self::from_entries(catalog.all())
    }

    /// Index raw entries. This is the only place alias collisions are
    /// detected; catalog loading runs it too.
    pub(crate) fn from_entries(entries: &[Emoji]) -> Result<Self> {
        let mut by_alias = HashMap::new();

        for (position, emoji) in entries.iter().enumerate() {
            for alias in &emoji.aliases {
                let Some(existing) = by_alias.insert(alias.clone(), position) else {
                    continue;
                };
                if existing == position {
                    return Err(StatusError::CatalogLoad(format!(
                        "entry '{}' lists alias '{}' twice",
                        emoji.canonical(),
                        alias
                    )));
                }
                return Err(StatusError::DuplicateAlias {
                    alias: alias.clone(),
                    first: entries[existing].canonical().to_string(),
                    second: emoji.canonical().to_string(),
                });
            }
        }

        Ok(Self { by_alias })
    }

    /// Position of the entry owning `alias`. Exact, case-sensitive match.
    pub fn resolve(&self, alias: &str) -> Option<usize> {
        self.by_alias.get(alias).copied()
    }
}
