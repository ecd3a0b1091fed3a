use std::collections::HashMap;

use super::{
    CatalogError, Modifier, ModifierOracle, Ore, OreOracle, Rarity, RarityTable, TablesOracle,
};
use crate::engine::{Slot, calculate_museum_bonuses};
use crate::stats::MuseumBonuses;

/// Validated, immutable ore and modifier catalog.
///
/// Construction checks every entry eagerly, so aggregation can treat the
/// catalog as well-formed. Conditions the engine tolerates (unrecognized
/// modifier effects, labels matching no stat) are reported by
/// [`Catalog::warnings`] instead of failing construction.
#[derive(Clone, Debug)]
pub struct Catalog {
    ores: Vec<Ore>,
    modifiers: Vec<Modifier>,
    ore_index: HashMap<String, usize>,
    modifier_index: HashMap<String, usize>,
    tables: RarityTable,
}

impl Catalog {
    /// Builds a catalog, preserving entry order.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found: duplicate names, ores with
    /// no usable effect, empty special-effect tables or invalid multipliers.
    pub fn new(
        ores: Vec<Ore>,
        modifiers: Vec<Modifier>,
        tables: RarityTable,
    ) -> Result<Self, CatalogError> {
        let mut ore_index = HashMap::with_capacity(ores.len());
        for (index, ore) in ores.iter().enumerate() {
            validate_ore(ore)?;
            if ore_index.insert(ore.name.clone(), index).is_some() {
                return Err(CatalogError::DuplicateOre(ore.name.clone()));
            }
        }

        let mut modifier_index = HashMap::with_capacity(modifiers.len());
        for (index, modifier) in modifiers.iter().enumerate() {
            if modifier_index
                .insert(modifier.name.clone(), index)
                .is_some()
            {
                return Err(CatalogError::DuplicateModifier(modifier.name.clone()));
            }
        }

        Ok(Self {
            ores,
            modifiers,
            ore_index,
            modifier_index,
            tables,
        })
    }

    /// Non-fatal findings: modifiers the engine will skip and single-stat
    /// labels that credit nothing.
    pub fn warnings(&self) -> Vec<CatalogError> {
        let labels = self
            .ores
            .iter()
            .filter(|ore| ore.special_effects.is_none())
            .filter_map(|ore| {
                let effect = ore.museum_effect.as_ref()?;
                (effect.matched_stats().next().is_none()).then(|| {
                    CatalogError::UnmatchedEffectLabel {
                        ore: ore.name.clone(),
                        label: effect.stat.clone(),
                    }
                })
            });

        let effects = self
            .modifiers
            .iter()
            .filter(|modifier| !modifier.effect.is_recognized())
            .map(|modifier| CatalogError::UnrecognizedModifierEffect {
                modifier: modifier.name.clone(),
                effect: modifier.effect.to_string(),
            });

        labels.chain(effects).collect()
    }

    pub fn ores(&self) -> &[Ore] {
        &self.ores
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn tables(&self) -> &RarityTable {
        &self.tables
    }

    /// Ores of one rarity tier, in catalog order.
    pub fn ores_by_rarity(&self, rarity: Rarity) -> impl Iterator<Item = &Ore> {
        self.ores.iter().filter(move |ore| ore.rarity == rarity)
    }

    /// Shorthand for [`calculate_museum_bonuses`] over this catalog.
    pub fn aggregate(&self, slots: &[Slot]) -> MuseumBonuses {
        calculate_museum_bonuses(self, slots)
    }
}

fn validate_ore(ore: &Ore) -> Result<(), CatalogError> {
    let invalid = |value: f64| !value.is_finite() || value < 0.0;

    match (&ore.special_effects, &ore.museum_effect) {
        (Some(effects), _) => {
            if effects.is_empty() {
                return Err(CatalogError::EmptySpecialEffects(ore.name.clone()));
            }
            if let Some(&value) = effects.values().find(|v| invalid(**v)) {
                return Err(CatalogError::InvalidMultiplier {
                    ore: ore.name.clone(),
                    value,
                });
            }
        }
        (None, Some(effect)) => {
            if invalid(effect.max_multiplier) {
                return Err(CatalogError::InvalidMultiplier {
                    ore: ore.name.clone(),
                    value: effect.max_multiplier,
                });
            }
        }
        (None, None) => return Err(CatalogError::MissingOreEffect(ore.name.clone())),
    }

    Ok(())
}

impl OreOracle for Catalog {
    fn ore(&self, name: &str) -> Option<&Ore> {
        self.ore_index.get(name).map(|&index| &self.ores[index])
    }
}

impl ModifierOracle for Catalog {
    fn modifier(&self, name: &str) -> Option<&Modifier> {
        self.modifier_index
            .get(name)
            .map(|&index| &self.modifiers[index])
    }
}

impl TablesOracle for Catalog {
    fn rarity_bonus(&self, rarity: Rarity) -> f64 {
        self.tables.bonus(rarity)
    }
}
