//! Content factory for building catalogs from data files.

use std::path::{Path, PathBuf};

use museum_core::{Catalog, GameError, Modifier, Ore, RarityTable};
use tracing::{debug, warn};

use crate::loaders::{LoadResult, ModifierLoader, OreLoader, TablesLoader};

pub const ORES_FILE: &str = "ores.ron";
pub const MODIFIERS_FILE: &str = "modifiers.ron";
pub const TABLES_FILE: &str = "tables.toml";

/// Content factory that loads the museum catalog from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── ores.ron
/// ├── modifiers.ron
/// └── tables.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the ore catalog from `ores.ron`.
    pub fn load_ores(&self) -> LoadResult<Vec<Ore>> {
        OreLoader::load(&self.data_dir.join(ORES_FILE))
    }

    /// Load the modifier catalog from `modifiers.ron`.
    pub fn load_modifiers(&self) -> LoadResult<Vec<Modifier>> {
        ModifierLoader::load(&self.data_dir.join(MODIFIERS_FILE))
    }

    /// Load the rarity bonus table from `tables.toml`.
    pub fn load_tables(&self) -> LoadResult<RarityTable> {
        TablesLoader::load(&self.data_dir.join(TABLES_FILE))
    }

    /// Load and validate the full catalog.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let catalog = build_catalog(self.load_ores()?, self.load_modifiers()?, self.load_tables()?)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, self.data_dir.display()))?;
        debug!(
            data_dir = %self.data_dir.display(),
            ores = catalog.ores().len(),
            modifiers = catalog.modifiers().len(),
            "loaded museum catalog"
        );
        Ok(catalog)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Builds a catalog from in-memory sources (RON, RON, TOML).
pub fn catalog_from_sources(ores: &str, modifiers: &str, tables: &str) -> LoadResult<Catalog> {
    build_catalog(
        OreLoader::parse(ores)?,
        ModifierLoader::parse(modifiers)?,
        TablesLoader::parse(tables)?,
    )
}

fn build_catalog(
    ores: Vec<Ore>,
    modifiers: Vec<Modifier>,
    tables: RarityTable,
) -> LoadResult<Catalog> {
    let catalog = Catalog::new(ores, modifiers, tables)?;
    for warning in catalog.warnings() {
        warn!(code = warning.error_code(), "{}", warning);
    }
    Ok(catalog)
}
