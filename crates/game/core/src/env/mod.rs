//! Traits describing read-only catalog data.
//!
//! Oracles expose ore definitions, modifier definitions and balance tables.
//! [`MuseumOracle`] bundles them so the engine can read everything it needs
//! without coupling to a concrete source; [`Catalog`] is the validated
//! in-memory implementation.
mod catalog;
mod error;
mod modifiers;
mod ores;
mod tables;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use modifiers::{Modifier, ModifierEffect, ModifierOracle};
pub use ores::{MuseumEffect, Ore, OreOracle, SpecialEffects};
pub use tables::{Rarity, RarityTable, TablesOracle};

/// Everything the aggregation engine reads.
pub trait MuseumOracle: OreOracle + ModifierOracle + TablesOracle {}

impl<T> MuseumOracle for T where T: OreOracle + ModifierOracle + TablesOracle + ?Sized {}
