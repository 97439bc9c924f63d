use crate::config::SPECIAL_CHAR;
use crate::error::{Result, StatusError};
use crate::index::AliasIndex;
use serde::{Deserialize, Serialize};

const EMOJI_DATA: &str = include_str!("data/emoji.json");

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Emoji {
    #[serde(rename = "emoji")]
    pub glyph: String,
    pub aliases: Vec<String>,
    pub description: String,
}

impl Emoji {
    /// The alias sent to the status API
    pub fn canonical(&self) -> &str {
        &self.aliases[0]
    }

    /// Line shown for this emoji in the interactive picker
    pub fn display(&self) -> String {
        format!(
            "{} {} {}",
            self.glyph,
            self.aliases.join(", "),
            self.description
        )
    }
}

/// Every known emoji, in the order of the data file.
#[derive(Debug, Clone)]
pub struct EmojiCatalog {
    entries: Vec<Emoji>,
}

impl EmojiCatalog {
    /// Load the catalog embedded in the binary
    pub fn load() -> Result<Self> {
        let catalog = Self::from_json(EMOJI_DATA)?;
        log::debug!("Loaded {} emoji from embedded catalog", catalog.len());
        Ok(catalog)
    }

    /// Parse and validate a catalog from its JSON form
    pub fn from_json(content: &str) -> Result<Self> {
        let entries: Vec<Emoji> = serde_json::from_str(content)
            .map_err(|e| StatusError::CatalogLoad(format!("malformed data: {}", e)))?;
        Self::from_entries(entries)
    }

    pub fn from_entries(entries: Vec<Emoji>) -> Result<Self> {
        if entries.is_empty() {
            return Err(StatusError::CatalogLoad("catalog is empty".to_string()));
        }

        for (position, entry) in entries.iter().enumerate() {
            validate_entry(position, entry)?;
        }
        AliasIndex::from_entries(&entries)?;

        Ok(Self { entries })
    }

    /// All entries, always in the same order
    pub fn all(&self) -> &[Emoji] {
        &self.entries
    }

    pub fn get(&self, position: usize) -> Option<&Emoji> {
        self.entries.get(position)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_entry(position: usize, entry: &Emoji) -> Result<()> {
    if entry.aliases.is_empty() {
        return Err(StatusError::CatalogLoad(format!(
            "entry {} ({}) has no aliases",
            position, entry.glyph
        )));
    }
    if entry.glyph.is_empty() {
        return Err(StatusError::CatalogLoad(format!(
            "entry '{}' has an empty glyph",
            entry.canonical()
        )));
    }
    for alias in &entry.aliases {
        if alias.is_empty() || alias.contains(SPECIAL_CHAR) {
            return Err(StatusError::CatalogLoad(format!(
                "entry {} has invalid alias '{}'",
                position, alias
            )));
        }
    }
    Ok(())
}
