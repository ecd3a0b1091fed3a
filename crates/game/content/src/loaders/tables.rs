//! Balance tables loader.
//!
//! ```toml
//! [rarity_bonuses]
//! common = 0.02
//! uncommon = 0.03
//! # ... one entry per rarity tier
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use museum_core::{Rarity, RarityTable};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Raw `tables.toml` layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablesFile {
    pub rarity_bonuses: BTreeMap<String, f64>,
}

/// Loader for balance tables from TOML files.
pub struct TablesLoader;

impl TablesLoader {
    pub fn load(path: &Path) -> LoadResult<RarityTable> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse balance tables from TOML text.
    ///
    /// Fails unless every rarity tier is mapped exactly once to a finite,
    /// non-negative bonus.
    pub fn parse(content: &str) -> LoadResult<RarityTable> {
        let file: TablesFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables TOML: {}", e))?;

        let mut entries = Vec::with_capacity(file.rarity_bonuses.len());
        for (key, value) in file.rarity_bonuses {
            let rarity: Rarity = key
                .parse()
                .map_err(|_| anyhow::anyhow!("Unknown rarity '{}' in rarity_bonuses", key))?;
            entries.push((rarity, value));
        }

        Ok(RarityTable::from_entries(entries)?)
    }
}
