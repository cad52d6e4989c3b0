use super::constants::MAX_LISTED_SUGGESTIONS;
use thiserror::Error;

/// One displayable 3D model and the names that summon it.
///
/// `aliases[0]` is the primary alias shown in suggestions.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelCatalogEntry {
    pub asset_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
}

impl ModelCatalogEntry {
    pub fn primary_alias(&self) -> &'static str {
        self.aliases.first().copied().unwrap_or(self.display_name)
    }
}

pub const MODEL_CATALOG: &[ModelCatalogEntry] = &[
    ModelCatalogEntry {
        asset_id: "/assets/models/rose.glb",
        display_name: "Rose",
        aliases: &["rose", "flower", "bloom", "blossom"],
    },
    ModelCatalogEntry {
        asset_id: "/assets/models/teddy.glb",
        display_name: "Teddy Bear",
        aliases: &["teddy", "bear", "teddybear", "toy"],
    },
    ModelCatalogEntry {
        asset_id: "/assets/models/castle.glb",
        display_name: "Castle",
        aliases: &["castle", "palace", "fortress", "tower"],
    },
];

#[derive(Debug, Error, PartialEq)]
pub enum LookupError {
    #[error("Please enter a name!")]
    EmptyInput,
    #[error("no model is registered under `{0}`")]
    NotFound(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("alias `{alias}` is used by both `{first}` and `{second}`")]
    DuplicateAlias {
        alias: String,
        first: &'static str,
        second: &'static str,
    },
}

#[inline]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Fixed name -> asset lookup table.
#[derive(Clone, Debug)]
pub struct ModelCatalog {
    entries: &'static [ModelCatalogEntry],
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::unchecked(MODEL_CATALOG)
    }
}

impl ModelCatalog {
    /// Build a catalog, rejecting entries that share an alias.
    pub fn new(entries: &'static [ModelCatalogEntry]) -> Result<Self, CatalogError> {
        for (i, entry) in entries.iter().enumerate() {
            for alias in entry.aliases {
                let alias = normalize(alias);
                let clash = entries[i + 1..]
                    .iter()
                    .find(|other| other.aliases.iter().any(|a| normalize(a) == alias));
                if let Some(other) = clash {
                    return Err(CatalogError::DuplicateAlias {
                        alias,
                        first: entry.asset_id,
                        second: other.asset_id,
                    });
                }
            }
        }
        Ok(Self { entries })
    }

    pub fn unchecked(entries: &'static [ModelCatalogEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [ModelCatalogEntry] {
        self.entries
    }

    /// Exact alias match after trimming and lowercasing, first entry wins.
    pub fn resolve(&self, input: &str) -> Result<&'static ModelCatalogEntry, LookupError> {
        let wanted = normalize(input);
        self.entries
            .iter()
            .find(|e| e.aliases.iter().any(|a| normalize(a) == wanted))
            .ok_or_else(|| LookupError::NotFound(wanted.clone()))
    }

    /// Form-submission entry point: rejects blank input before resolving.
    pub fn lookup(&self, input: &str) -> Result<&'static ModelCatalogEntry, LookupError> {
        if input.trim().is_empty() {
            return Err(LookupError::EmptyInput);
        }
        self.resolve(input)
    }

    pub fn list_suggestions(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.primary_alias()).collect()
    }

    pub fn display_name(&self, asset_id: &str) -> &'static str {
        self.entries
            .iter()
            .find(|e| e.asset_id == asset_id)
            .map(|e| e.display_name)
            .unwrap_or("Unknown")
    }

    /// User-facing hint for an unrecognised name.
    pub fn suggestion_message(&self) -> String {
        let names = self.list_suggestions();
        let shown = names
            .iter()
            .take(MAX_LISTED_SUGGESTIONS)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        let more = if names.len() > MAX_LISTED_SUGGESTIONS {
            ", ..."
        } else {
            ""
        };
        format!("I don't know that one yet. Try: {shown}{more}")
    }
}
