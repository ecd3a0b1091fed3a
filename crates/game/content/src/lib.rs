//! Data-driven museum content and loaders.
//!
//! This crate ships the ore and modifier catalogs plus the rarity bonus table
//! as RON/TOML data files, and provides loaders turning them (or a user data
//! directory) into a validated [`museum_core::Catalog`]:
//! - Ore catalog (`ores.ron`)
//! - Modifier catalog (`modifiers.ron`)
//! - Rarity bonus table (`tables.toml`)
//! - Museum layouts (`.ron` or `.toml`)
//!
//! All loaders use museum-core types directly with serde for deserialization.

#[cfg(feature = "loaders")]
pub mod builtin;
#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use builtin::builtin_catalog;
#[cfg(feature = "loaders")]
pub use loaders::{
    ContentFactory, LayoutError, LayoutLoader, LoadResult, ModifierLoader, MuseumLayout,
    OreLoader, TablesLoader,
};
