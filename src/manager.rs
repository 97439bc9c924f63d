use crate::catalog::{Emoji, EmojiCatalog};
use crate::config::DEFAULT_EMOJI;
use crate::error::Result;
use crate::expansion::replace_shortcodes;
use crate::index::AliasIndex;

/// Read-only view over the emoji catalog and its alias index.
///
/// Built once at startup and shared by reference; nothing mutates it after
/// construction, so concurrent readers need no locking.
#[derive(Debug, Clone)]
pub struct EmojiManager {
    catalog: EmojiCatalog,
    index: AliasIndex,
}

impl EmojiManager {
    /// Load the embedded catalog and index it
    pub fn new() -> Result<Self> {
        Self::from_catalog(EmojiCatalog::load()?)
    }

    pub fn from_catalog(catalog: EmojiCatalog) -> Result<Self> {
        let index = AliasIndex::build(&catalog)?;
        Ok(Self { catalog, index })
    }

    /// All emoji in catalog order
    pub fn emojis(&self) -> &[Emoji] {
        self.catalog.all()
    }

    pub fn resolve(&self, alias: &str) -> Option<&Emoji> {
        self.index
            .resolve(alias)
            .and_then(|position| self.catalog.get(position))
    }

    /// Replace every known `:alias:` in `text` with its glyph
    pub fn replace_all(&self, text: &str) -> String {
        replace_shortcodes(text, |alias| {
            self.resolve(alias).map(|emoji| emoji.glyph.as_str())
        })
    }

    /// Position of [`DEFAULT_EMOJI`] in [`emojis`](Self::emojis), for the
    /// picker's preselected row.
    pub fn default_index(&self) -> usize {
        self.index.resolve(DEFAULT_EMOJI).unwrap_or(0)
    }

    /// Picker rows, one per emoji, in catalog order
    pub fn display_choices(&self) -> Vec<String> {
        self.emojis().iter().map(Emoji::display).collect()
    }
}
