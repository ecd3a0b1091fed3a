//! Ore catalog loader.

use std::path::Path;

use museum_core::Ore;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Ore catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OreCatalog {
    pub ores: Vec<Ore>,
}

/// Loader for the ore catalog from RON files.
pub struct OreLoader;

impl OreLoader {
    /// Load the ore catalog from a RON file.
    ///
    /// Entries are returned unvalidated; build a
    /// [`Catalog`](museum_core::Catalog) to check them.
    pub fn load(path: &Path) -> LoadResult<Vec<Ore>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse an ore catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<Ore>> {
        let catalog: OreCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse ore catalog RON: {}", e))?;

        Ok(catalog.ores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use museum_core::{Rarity, Stat};

    #[test]
    fn parses_single_stat_and_special_ores() {
        let ores = OreLoader::parse(
            r#"(
                ores: [
                    (name: "Copper", rarity: Common, museum_effect: Some((stat: "Luck", max_multiplier: 0.05))),
                    (name: "Voidstone", rarity: Exotic, special_effects: Some({"luck": 0.5, "size_boost": 0.25})),
                ],
            )"#,
        )
        .expect("valid RON");

        assert_eq!(ores.len(), 2);
        assert_eq!(ores[0].rarity, Rarity::Common);
        assert_eq!(
            ores[0].museum_effect.as_ref().map(|e| e.stat.as_str()),
            Some("Luck")
        );

        let special = ores[1].special_effects.as_ref().expect("special effects");
        assert!(ores[1].museum_effect.is_none());
        assert_eq!(special.get(&Stat::SizeBoost), Some(&0.25));
    }

    #[test]
    fn unknown_special_effect_key_fails_to_parse() {
        let err = OreLoader::parse(
            r#"(ores: [(name: "Odd", rarity: Rare, special_effects: Some({"charisma": 1.0}))])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("charisma"), "{err}");
    }

    #[test]
    fn unknown_rarity_fails_to_parse() {
        let result = OreLoader::parse(
            r#"(ores: [(name: "Odd", rarity: Ancient, museum_effect: Some((stat: "Luck", max_multiplier: 1.0)))])"#,
        );
        assert!(result.is_err());
    }
}
