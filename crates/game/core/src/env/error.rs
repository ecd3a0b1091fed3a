//! Catalog validation errors.
//!
//! Raised eagerly while a [`Catalog`](super::Catalog) or
//! [`RarityTable`](super::RarityTable) is built, never during aggregation.

use super::Rarity;
use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// Two ores share a name; slot lookups would be ambiguous.
    #[error("duplicate ore '{0}'")]
    DuplicateOre(String),

    /// Two modifiers share a name.
    #[error("duplicate modifier '{0}'")]
    DuplicateModifier(String),

    /// Ore has neither a museum effect nor special effects.
    #[error("ore '{0}' defines no museum effect")]
    MissingOreEffect(String),

    /// Ore declares a special-effect table with no entries.
    #[error("ore '{0}' has an empty special effect table")]
    EmptySpecialEffects(String),

    /// Single-stat label matches none of the known stats.
    #[error("ore '{ore}' museum effect label '{label}' names no known stat")]
    UnmatchedEffectLabel { ore: String, label: String },

    /// Multiplier is negative or not a finite number.
    #[error("ore '{ore}' has invalid multiplier {value}")]
    InvalidMultiplier { ore: String, value: f64 },

    /// Rarity tier has no bonus mapping.
    #[error("rarity {0} has no modifier bonus")]
    MissingRarityBonus(Rarity),

    /// Rarity tier is mapped more than once.
    #[error("rarity {0} is mapped more than once")]
    DuplicateRarityBonus(Rarity),

    /// Rarity bonus is negative or not a finite number.
    #[error("rarity {rarity} has invalid modifier bonus {value}")]
    InvalidRarityBonus { rarity: Rarity, value: f64 },

    /// Modifier effect category is not recognized by the engine.
    #[error("modifier '{modifier}' has unrecognized effect '{effect}'")]
    UnrecognizedModifierEffect { modifier: String, effect: String },
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        use CatalogError::*;
        match self {
            // Tolerated: the engine skips the modifier and logs a warning
            UnrecognizedModifierEffect { .. } | UnmatchedEffectLabel { .. } => {
                ErrorSeverity::Warning
            }

            DuplicateOre(_)
            | DuplicateModifier(_)
            | MissingOreEffect(_)
            | EmptySpecialEffects(_)
            | InvalidMultiplier { .. } => ErrorSeverity::Validation,

            // Incomplete balance tables make the rarity bonus undefined
            MissingRarityBonus(_) | DuplicateRarityBonus(_) | InvalidRarityBonus { .. } => {
                ErrorSeverity::Fatal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use CatalogError::*;
        match self {
            DuplicateOre(_) => "CATALOG_DUPLICATE_ORE",
            DuplicateModifier(_) => "CATALOG_DUPLICATE_MODIFIER",
            MissingOreEffect(_) => "CATALOG_MISSING_ORE_EFFECT",
            EmptySpecialEffects(_) => "CATALOG_EMPTY_SPECIAL_EFFECTS",
            UnmatchedEffectLabel { .. } => "CATALOG_UNMATCHED_EFFECT_LABEL",
            InvalidMultiplier { .. } => "CATALOG_INVALID_MULTIPLIER",
            MissingRarityBonus(_) => "CATALOG_MISSING_RARITY_BONUS",
            DuplicateRarityBonus(_) => "CATALOG_DUPLICATE_RARITY_BONUS",
            InvalidRarityBonus { .. } => "CATALOG_INVALID_RARITY_BONUS",
            UnrecognizedModifierEffect { .. } => "CATALOG_UNRECOGNIZED_MODIFIER_EFFECT",
        }
    }
}
