//! Modifier catalog loader.

use std::path::Path;

use museum_core::Modifier;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Modifier catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierCatalog {
    pub modifiers: Vec<Modifier>,
}

/// Loader for the modifier catalog from RON files.
pub struct ModifierLoader;

impl ModifierLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Modifier>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse a modifier catalog from RON text.
    ///
    /// Unknown effect categories are accepted and kept as
    /// [`ModifierEffect::Other`](museum_core::ModifierEffect::Other).
    pub fn parse(content: &str) -> LoadResult<Vec<Modifier>> {
        let catalog: ModifierCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse modifier catalog RON: {}", e))?;

        Ok(catalog.modifiers)
    }
}
