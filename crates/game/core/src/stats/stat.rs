//! Stat identifiers for the nine museum bonus accumulators.
//!
//! Catalog data refers to stats in two ways:
//!
//! - **Keys** in special-effect maps (`"digStrength"`, `"dig_strength"`, ...),
//!   resolved exactly through [`Stat::from_key`].
//! - **Free-text labels** on single-stat museum effects (`"Dig Speed and Shake
//!   Speed"`), matched fuzzily through [`LABEL_MATCHERS`].

use strum::IntoEnumIterator;

/// One of the nine additive museum bonuses.
///
/// The discriminant order is the canonical display order and the index into
/// [`MuseumBonuses`](super::MuseumBonuses).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
)]
#[strum(serialize_all = "camelCase")]
pub enum Stat {
    Luck,
    DigStrength,
    DigSpeed,
    ShakeStrength,
    ShakeSpeed,
    Capacity,
    SellBoost,
    SizeBoost,
    ModifierBoost,
}

/// Substring table for free-text museum effect labels.
///
/// Every entry is tested independently against the lower-cased label, so a
/// label such as `"Dig Speed and Shake Speed"` credits two stats.
pub const LABEL_MATCHERS: [(&str, Stat); 9] = [
    ("luck", Stat::Luck),
    ("dig strength", Stat::DigStrength),
    ("dig speed", Stat::DigSpeed),
    ("shake strength", Stat::ShakeStrength),
    ("shake speed", Stat::ShakeSpeed),
    ("capacity", Stat::Capacity),
    ("sell boost", Stat::SellBoost),
    ("size boost", Stat::SizeBoost),
    ("modifier boost", Stat::ModifierBoost),
];

impl Stat {
    /// Position of this stat in the canonical order.
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Canonical camelCase key used in data files (`"digStrength"`).
    pub fn key(self) -> &'static str {
        match self {
            Stat::Luck => "luck",
            Stat::DigStrength => "digStrength",
            Stat::DigSpeed => "digSpeed",
            Stat::ShakeStrength => "shakeStrength",
            Stat::ShakeSpeed => "shakeSpeed",
            Stat::Capacity => "capacity",
            Stat::SellBoost => "sellBoost",
            Stat::SizeBoost => "sizeBoost",
            Stat::ModifierBoost => "modifierBoost",
        }
    }

    /// Human-readable name (`"Dig Strength"`).
    pub const fn label(self) -> &'static str {
        match self {
            Stat::Luck => "Luck",
            Stat::DigStrength => "Dig Strength",
            Stat::DigSpeed => "Dig Speed",
            Stat::ShakeStrength => "Shake Strength",
            Stat::ShakeSpeed => "Shake Speed",
            Stat::Capacity => "Capacity",
            Stat::SellBoost => "Sell Boost",
            Stat::SizeBoost => "Size Boost",
            Stat::ModifierBoost => "Modifier Boost",
        }
    }

    /// Resolves a stat key, accepting camelCase, snake_case, kebab-case and
    /// spaced spellings in any letter case.
    ///
    /// ```
    /// # use museum_core::stats::Stat;
    /// assert_eq!(Stat::from_key("digStrength"), Some(Stat::DigStrength));
    /// assert_eq!(Stat::from_key("dig_strength"), Some(Stat::DigStrength));
    /// assert_eq!(Stat::from_key("Dig Strength"), Some(Stat::DigStrength));
    /// assert_eq!(Stat::from_key("teleportation"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        let compact: String = key
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Self::iter().find(|stat| stat.key().eq_ignore_ascii_case(&compact))
    }

    /// Stats whose substring appears in a free-text museum effect label.
    ///
    /// Matching is case-insensitive and may yield several stats.
    pub fn matching_label(label: &str) -> impl Iterator<Item = Stat> {
        let lowered = label.to_lowercase();
        LABEL_MATCHERS
            .into_iter()
            .filter(move |(needle, _)| lowered.contains(needle))
            .map(|(_, stat)| stat)
    }
}

impl core::str::FromStr for Stat {
    type Err = UnknownStat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| UnknownStat(s.to_owned()))
    }
}

/// Returned when a stat key does not name any of the nine accumulators.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown stat key '{0}'")]
pub struct UnknownStat(pub String);

#[cfg(feature = "serde")]
impl serde::Serialize for Stat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.key())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Stat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct StatVisitor;

        impl serde::de::Visitor<'_> for StatVisitor {
            type Value = Stat;

            fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str("a museum stat key such as \"digStrength\"")
            }

            fn visit_str<E>(self, value: &str) -> Result<Stat, E>
            where
                E: serde::de::Error,
            {
                Stat::from_key(value).ok_or_else(|| E::custom(UnknownStat(value.to_owned())))
            }
        }

        deserializer.deserialize_str(StatVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn every_stat_round_trips_through_its_key_and_label() {
        for stat in Stat::iter() {
            assert_eq!(Stat::from_key(stat.key()), Some(stat));
            assert_eq!(Stat::from_key(stat.label()), Some(stat));
            assert_eq!(stat.to_string(), stat.key());
        }
    }

    #[test]
    fn key_aliases_resolve() {
        assert_eq!(Stat::from_key("SHAKE_SPEED"), Some(Stat::ShakeSpeed));
        assert_eq!(Stat::from_key("size-boost"), Some(Stat::SizeBoost));
        assert_eq!(Stat::from_key(" modifierboost "), Some(Stat::ModifierBoost));
        assert_eq!("sell boost".parse::<Stat>(), Ok(Stat::SellBoost));
        assert_eq!(
            "strength".parse::<Stat>(),
            Err(UnknownStat("strength".to_string()))
        );
    }

    #[test]
    fn label_table_covers_every_stat_once() {
        assert_eq!(LABEL_MATCHERS.len(), Stat::COUNT);
        for stat in Stat::iter() {
            let hits = LABEL_MATCHERS.iter().filter(|(_, s)| *s == stat).count();
            assert_eq!(hits, 1, "{stat} must appear exactly once");
        }
    }

    #[test]
    fn label_matching_is_case_insensitive_and_multi() {
        let stats: Vec<_> = Stat::matching_label("Dig Speed and Shake Speed").collect();
        assert_eq!(stats, vec![Stat::DigSpeed, Stat::ShakeSpeed]);

        let stats: Vec<_> = Stat::matching_label("LUCK").collect();
        assert_eq!(stats, vec![Stat::Luck]);

        assert_eq!(Stat::matching_label("Teleport Range").count(), 0);
    }

    #[test]
    fn indices_follow_declaration_order() {
        for (expected, stat) in Stat::iter().enumerate() {
            assert_eq!(stat.as_index(), expected);
        }
    }
}
