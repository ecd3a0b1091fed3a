use strum::{EnumCount, IntoEnumIterator};

use super::CatalogError;

/// Oracle providing balance tables.
///
/// The rarity bonus is the scalar a modifier contributes when attached to an
/// ore of the given tier. Implementations must be total over [`Rarity`].
pub trait TablesOracle: Send + Sync {
    fn rarity_bonus(&self, rarity: Rarity) -> f64;
}

/// Ore rarity tier, ordered from most to least common.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic,
    Exotic,
}

impl Rarity {
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Modifier bonus of the standard balance table.
    pub const fn standard_bonus(self) -> f64 {
        match self {
            Rarity::Common => 0.02,
            Rarity::Uncommon => 0.03,
            Rarity::Rare => 0.05,
            Rarity::Epic => 0.075,
            Rarity::Legendary => 0.10,
            Rarity::Mythic => 0.15,
            Rarity::Exotic => 0.25,
        }
    }
}

/// Complete rarity → modifier bonus mapping.
///
/// A table can only be constructed with an entry for every tier, so lookups
/// never fail at call time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RarityTable {
    bonuses: [f64; Rarity::COUNT],
}

impl RarityTable {
    /// The built-in balance table.
    pub fn standard() -> Self {
        let mut bonuses = [0.0; Rarity::COUNT];
        for rarity in Rarity::iter() {
            bonuses[rarity.as_index()] = rarity.standard_bonus();
        }
        Self { bonuses }
    }

    /// Builds a table from explicit entries.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateRarityBonus`] if a tier is listed twice
    /// - [`CatalogError::InvalidRarityBonus`] for negative or non-finite values
    /// - [`CatalogError::MissingRarityBonus`] for the first tier left unmapped
    pub fn from_entries(
        entries: impl IntoIterator<Item = (Rarity, f64)>,
    ) -> Result<Self, CatalogError> {
        let mut slots: [Option<f64>; Rarity::COUNT] = [None; Rarity::COUNT];

        for (rarity, value) in entries {
            if !value.is_finite() || value < 0.0 {
                return Err(CatalogError::InvalidRarityBonus { rarity, value });
            }
            let slot = &mut slots[rarity.as_index()];
            if slot.is_some() {
                return Err(CatalogError::DuplicateRarityBonus(rarity));
            }
            *slot = Some(value);
        }

        let mut bonuses = [0.0; Rarity::COUNT];
        for rarity in Rarity::iter() {
            bonuses[rarity.as_index()] =
                slots[rarity.as_index()].ok_or(CatalogError::MissingRarityBonus(rarity))?;
        }

        Ok(Self { bonuses })
    }

    #[inline]
    pub fn bonus(&self, rarity: Rarity) -> f64 {
        self.bonuses[rarity.as_index()]
    }

    /// `(rarity, bonus)` pairs from most to least common.
    pub fn entries(&self) -> impl Iterator<Item = (Rarity, f64)> + '_ {
        Rarity::iter().map(|rarity| (rarity, self.bonus(rarity)))
    }
}

impl Default for RarityTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TablesOracle for RarityTable {
    fn rarity_bonus(&self, rarity: Rarity) -> f64 {
        self.bonus(rarity)
    }
}
