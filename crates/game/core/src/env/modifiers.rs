use crate::stats::Stat;

pub trait ModifierOracle: Send + Sync {
    fn modifier(&self, name: &str) -> Option<&Modifier>;
}

/// Effect category of a modifier, selecting which bonuses its value feeds.
///
/// Categories are written as display text in data files (`"Dig and Shake
/// Speed"`). Text matching no known category is kept verbatim in
/// [`ModifierEffect::Other`]; such modifiers contribute nothing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModifierEffect {
    DigSpeed,
    ShakeStrength,
    ShakeSpeed,
    DigStrength,
    Luck,
    ModifierBoost,
    DigAndShakeSpeed,
    LuckAndCapacity,
    SizeBoost,
    Other(String),
}

impl ModifierEffect {
    /// Parses a category name. Only the exact display names are recognized;
    /// any other spelling is kept as [`ModifierEffect::Other`].
    pub fn parse(text: &str) -> Self {
        match text {
            "Dig Speed" => Self::DigSpeed,
            "Shake Strength" => Self::ShakeStrength,
            "Shake Speed" => Self::ShakeSpeed,
            "Dig Strength" => Self::DigStrength,
            "Luck" => Self::Luck,
            "Modifier Boost" => Self::ModifierBoost,
            "Dig and Shake Speed" => Self::DigAndShakeSpeed,
            "Luck and Capacity" => Self::LuckAndCapacity,
            "Size Boost" => Self::SizeBoost,
            _ => Self::Other(text.to_owned()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::DigSpeed => "Dig Speed",
            Self::ShakeStrength => "Shake Strength",
            Self::ShakeSpeed => "Shake Speed",
            Self::DigStrength => "Dig Strength",
            Self::Luck => "Luck",
            Self::ModifierBoost => "Modifier Boost",
            Self::DigAndShakeSpeed => "Dig and Shake Speed",
            Self::LuckAndCapacity => "Luck and Capacity",
            Self::SizeBoost => "Size Boost",
            Self::Other(name) => name,
        }
    }

    /// Accumulators credited with the full modifier value.
    ///
    /// Compound categories credit each stat independently; the value is not
    /// split. Unrecognized categories credit nothing.
    pub const fn targets(&self) -> &'static [Stat] {
        match self {
            Self::DigSpeed => &[Stat::DigSpeed],
            Self::ShakeStrength => &[Stat::ShakeStrength],
            Self::ShakeSpeed => &[Stat::ShakeSpeed],
            Self::DigStrength => &[Stat::DigStrength],
            Self::Luck => &[Stat::Luck],
            Self::ModifierBoost => &[Stat::ModifierBoost],
            Self::DigAndShakeSpeed => &[Stat::DigSpeed, Stat::ShakeSpeed],
            Self::LuckAndCapacity => &[Stat::Luck, Stat::Capacity],
            Self::SizeBoost => &[Stat::SizeBoost],
            Self::Other(_) => &[],
        }
    }

    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl core::fmt::Display for ModifierEffect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for ModifierEffect {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ModifierEffect {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ModifierEffect {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::parse(&text))
    }
}

/// An enhancement attachable to an ore in a museum slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifier {
    pub name: String,
    pub effect: ModifierEffect,
}

impl Modifier {
    pub fn new(name: impl Into<String>, effect: impl Into<ModifierEffect>) -> Self {
        Self {
            name: name.into(),
            effect: effect.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_round_trip_through_their_names() {
        let known = [
            ModifierEffect::DigSpeed,
            ModifierEffect::ShakeStrength,
            ModifierEffect::ShakeSpeed,
            ModifierEffect::DigStrength,
            ModifierEffect::Luck,
            ModifierEffect::ModifierBoost,
            ModifierEffect::DigAndShakeSpeed,
            ModifierEffect::LuckAndCapacity,
            ModifierEffect::SizeBoost,
        ];
        for effect in known {
            assert!(effect.is_recognized());
            assert_eq!(ModifierEffect::parse(effect.name()), effect);
            assert!(!effect.targets().is_empty());
        }
    }

    #[test]
    fn other_spellings_are_not_recognized() {
        for text in ["dig speed", "  LUCK ", "luck AND capacity", "Luck "] {
            let effect = ModifierEffect::parse(text);
            assert_eq!(effect, ModifierEffect::Other(text.to_string()));
            assert!(!effect.is_recognized());
            assert!(effect.targets().is_empty());
        }
    }

    #[test]
    fn unknown_category_is_kept_verbatim() {
        let effect = ModifierEffect::parse("Teleportation");
        assert_eq!(effect, ModifierEffect::Other("Teleportation".to_string()));
        assert_eq!(effect.to_string(), "Teleportation");
        assert!(effect.targets().is_empty());
        assert!(!effect.is_recognized());
    }

    #[test]
    fn compound_categories_target_both_stats() {
        assert_eq!(
            ModifierEffect::DigAndShakeSpeed.targets(),
            &[Stat::DigSpeed, Stat::ShakeSpeed]
        );
        assert_eq!(
            ModifierEffect::LuckAndCapacity.targets(),
            &[Stat::Luck, Stat::Capacity]
        );
    }
}
