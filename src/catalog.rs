//! The table of sprites to generate
//!
//! The built-in catalog mirrors the asset names the game client loads from
//! `farm-game/assets/`. A TOML file with the same shape can replace it:
//!
//! ```toml
//! [[sprite]]
//! file = "grass.png"
//! color = "#339933"
//! pattern = "grass"
//! ```

use crate::color::Color;
use crate::pattern::Pattern;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Catalog loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// File I/O error
    #[error("Failed to read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML parsing error
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
    /// Two entries would write the same file
    #[error("Duplicate sprite file '{0}' in catalog")]
    DuplicateFile(String),
    /// An entry's file name is empty or points outside the output directory
    #[error("Invalid sprite file name '{0}'")]
    InvalidFile(String),
    /// `--only` named an entry that isn't in the catalog
    #[error("No sprite named '{0}' in catalog")]
    UnknownSprite(String),
}

/// One sprite to generate: where it goes and how it is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpriteDescriptor {
    /// Output file name, relative to the output directory
    pub file: String,
    pub color: Color,
    pub pattern: Pattern,
}

impl SpriteDescriptor {
    pub fn new(file: impl Into<String>, color: Color, pattern: Pattern) -> Self {
        Self { file: file.into(), color, pattern }
    }
}

/// Ordered list of sprite descriptors. Order only affects progress output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    entries: Vec<SpriteDescriptor>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    sprite: Vec<SpriteDescriptor>,
}

/// `(file, (r, g, b, a), pattern)` rows of the built-in catalog.
const BUILTIN: [(&str, [u8; 4], Pattern); 16] = [
    // Tiles
    ("grass.png", [51, 153, 51, 255], Pattern::Grass),
    ("soil.png", [102, 76, 51, 255], Pattern::Soil),
    ("watered_soil.png", [77, 51, 25, 255], Pattern::Soil),
    // Wheat
    ("wheat_seed.png", [204, 178, 128, 255], Pattern::Seed),
    ("wheat_sprout.png", [128, 178, 76, 255], Pattern::Sprout),
    ("wheat_growing.png", [178, 204, 102, 255], Pattern::Growing),
    ("wheat_mature.png", [230, 204, 76, 255], Pattern::WheatMature),
    // Carrot
    ("carrot_seed.png", [204, 178, 128, 255], Pattern::Seed),
    ("carrot_sprout.png", [76, 153, 76, 255], Pattern::Sprout),
    ("carrot_growing.png", [76, 178, 76, 255], Pattern::Growing),
    ("carrot_mature.png", [230, 128, 51, 255], Pattern::CarrotMature),
    // Tomato
    ("tomato_seed.png", [204, 178, 128, 255], Pattern::Seed),
    ("tomato_sprout.png", [76, 128, 76, 255], Pattern::Sprout),
    ("tomato_growing.png", [102, 153, 76, 255], Pattern::Growing),
    ("tomato_mature.png", [204, 51, 51, 255], Pattern::TomatoMature),
    // Player
    ("player.png", [76, 76, 204, 255], Pattern::Player),
];

impl Catalog {
    /// Build a catalog, rejecting duplicate or unsafe file names.
    pub fn new(entries: Vec<SpriteDescriptor>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !is_plain_relative(&entry.file) {
                return Err(CatalogError::InvalidFile(entry.file.clone()));
            }
            if !seen.insert(entry.file.as_str()) {
                return Err(CatalogError::DuplicateFile(entry.file.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// The sixteen sprites the farm game ships with.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(file, color, pattern)| SpriteDescriptor::new(*file, Color(*color), *pattern))
            .collect();
        Self { entries }
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.sprite)
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)
            .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml(&content)
    }

    /// Keep only the named entries, preserving catalog order.
    ///
    /// Every name must exist; nothing is filtered if any is missing.
    pub fn select<S: AsRef<str>>(self, names: &[S]) -> Result<Self, CatalogError> {
        for name in names {
            let name = name.as_ref();
            if !self.entries.iter().any(|e| e.file == name) {
                return Err(CatalogError::UnknownSprite(name.to_string()));
            }
        }
        let entries = self
            .entries
            .into_iter()
            .filter(|e| names.iter().any(|n| n.as_ref() == e.file))
            .collect();
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[SpriteDescriptor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a SpriteDescriptor;
    type IntoIter = std::slice::Iter<'a, SpriteDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A bare file name or nested relative path with no `..` or root component.
fn is_plain_relative(file: &str) -> bool {
    use std::path::Component;

    !file.is_empty() && Path::new(file).components().all(|c| matches!(c, Component::Normal(_)))
}
