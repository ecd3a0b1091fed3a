//! Content loaders for reading museum data from files.
//!
//! Catalog files are RON (`ores.ron`, `modifiers.ron`), balance tables are
//! TOML (`tables.toml`) and museum layouts may be either.

pub mod factory;
pub mod layout;
pub mod modifiers;
pub mod ores;
pub mod tables;

pub use factory::ContentFactory;
pub use layout::{LayoutError, LayoutLoader, MuseumLayout};
pub use modifiers::ModifierLoader;
pub use ores::OreLoader;
pub use tables::TablesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
