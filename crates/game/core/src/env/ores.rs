use std::collections::BTreeMap;

use super::Rarity;
use crate::stats::Stat;

pub trait OreOracle: Send + Sync {
    fn ore(&self, name: &str) -> Option<&Ore>;
}

/// Multi-stat override carried by a handful of ores.
///
/// Ordered so iteration (and therefore diagnostics) is deterministic.
pub type SpecialEffects = BTreeMap<Stat, f64>;

/// Single-stat museum effect with a free-text stat label.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MuseumEffect {
    /// Display label such as `"Luck"` or `"Dig Speed and Shake Speed"`.
    pub stat: String,
    pub max_multiplier: f64,
}

impl MuseumEffect {
    pub fn new(stat: impl Into<String>, max_multiplier: f64) -> Self {
        Self {
            stat: stat.into(),
            max_multiplier,
        }
    }

    /// Stats this label credits, via the substring table.
    pub fn matched_stats(&self) -> impl Iterator<Item = Stat> {
        Stat::matching_label(&self.stat)
    }
}

/// A collectible ore as placed in the museum.
///
/// When `special_effects` is present it replaces `museum_effect` entirely
/// during aggregation; `museum_effect` then only serves as a display label.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ore {
    pub name: String,
    pub rarity: Rarity,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub museum_effect: Option<MuseumEffect>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub special_effects: Option<SpecialEffects>,
}

impl Ore {
    pub fn new(name: impl Into<String>, rarity: Rarity, museum_effect: MuseumEffect) -> Self {
        Self {
            name: name.into(),
            rarity,
            museum_effect: Some(museum_effect),
            special_effects: None,
        }
    }

    /// Ore whose museum contribution is a multi-stat table.
    pub fn with_special_effects(
        name: impl Into<String>,
        rarity: Rarity,
        effects: impl IntoIterator<Item = (Stat, f64)>,
    ) -> Self {
        Self {
            name: name.into(),
            rarity,
            museum_effect: None,
            special_effects: Some(effects.into_iter().collect()),
        }
    }

    /// Attaches a display label to an ore (builder pattern).
    pub fn labelled(mut self, museum_effect: MuseumEffect) -> Self {
        self.museum_effect = Some(museum_effect);
        self
    }

    pub fn has_special_effects(&self) -> bool {
        self.special_effects.is_some()
    }
}
