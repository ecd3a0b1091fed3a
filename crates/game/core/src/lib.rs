//! Deterministic museum bonus rules shared by every front end.
//!
//! `museum-core` defines the catalog data model (ores, modifiers, rarity
//! tables), the nine-stat bonus vector and the pure aggregation engine that
//! folds a museum layout into bonuses. Catalog data is supplied through the
//! oracle traits in [`env`]; loaders live in `museum-content`.
pub mod engine;
pub mod env;
pub mod error;
pub mod stats;

pub use engine::{Slot, calculate_museum_bonuses, slot_contribution};
pub use env::{
    Catalog, CatalogError, Modifier, ModifierEffect, ModifierOracle, MuseumEffect, MuseumOracle,
    Ore, OreOracle, Rarity, RarityTable, SpecialEffects, TablesOracle,
};
pub use error::{ErrorSeverity, GameError};
pub use stats::{LABEL_MATCHERS, MuseumBonuses, Stat, UnknownStat, format_percent};
