//! Catalog embedded at compile time from `data/`.

use std::sync::OnceLock;

use museum_core::Catalog;

use crate::loaders::{LoadResult, factory::catalog_from_sources};

const ORES: &str = include_str!("../data/ores.ron");
const MODIFIERS: &str = include_str!("../data/modifiers.ron");
const TABLES: &str = include_str!("../data/tables.toml");

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// The shipped catalog, parsed and validated on first use.
///
/// A failed load is not cached; the next call parses again.
pub fn builtin_catalog() -> LoadResult<&'static Catalog> {
    if let Some(catalog) = BUILTIN.get() {
        return Ok(catalog);
    }
    let catalog = catalog_from_sources(ORES, MODIFIERS, TABLES)
        .map_err(|e| anyhow::anyhow!("built-in catalog is invalid: {}", e))?;
    Ok(BUILTIN.get_or_init(|| catalog))
}
