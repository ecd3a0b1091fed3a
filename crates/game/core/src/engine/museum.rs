//! Museum bonus aggregation.
//!
//! Each slot is scored on its own and the per-slot vectors are summed, so the
//! result does not depend on slot order.
//!
//! Per slot:
//! 1. Skip empty slots and ores missing from the catalog.
//! 2. Base contribution: the ore's special effects if it has any, otherwise
//!    its museum effect multiplier credited to every stat the label matches.
//!    With a resolved modifier, special-effect stats additionally receive the
//!    rarity bonus.
//! 3. A resolved modifier credits the rarity bonus to the stats selected by
//!    its effect category.
//!
//! Step 2's rarity add-on and step 3 both fire for special-effect ores, so a
//! stat covered by both receives the rarity bonus twice.

use tracing::warn;

use super::Slot;
use crate::env::MuseumOracle;
use crate::stats::MuseumBonuses;

/// Folds a museum layout into its bonus vector.
///
/// Never fails: unresolved ore or modifier names contribute nothing, and a
/// modifier with an unrecognized effect category only logs a warning.
pub fn calculate_museum_bonuses<O>(oracle: &O, slots: &[Slot]) -> MuseumBonuses
where
    O: MuseumOracle + ?Sized,
{
    slots
        .iter()
        .map(|slot| slot_contribution(oracle, slot))
        .sum()
}

/// Bonus vector contributed by a single slot.
pub fn slot_contribution<O>(oracle: &O, slot: &Slot) -> MuseumBonuses
where
    O: MuseumOracle + ?Sized,
{
    let mut bonuses = MuseumBonuses::new();

    let Some(ore) = slot.ore.as_deref().and_then(|name| oracle.ore(name)) else {
        return bonuses;
    };
    let modifier = slot
        .modifier
        .as_deref()
        .and_then(|name| oracle.modifier(name));
    let modifier_value = oracle.rarity_bonus(ore.rarity);

    match (&ore.special_effects, &ore.museum_effect) {
        (Some(effects), _) => {
            for (&stat, &value) in effects {
                bonuses.credit(stat, value);
                if modifier.is_some() {
                    bonuses.credit(stat, modifier_value);
                }
            }
        }
        (None, Some(effect)) => {
            bonuses.credit_all(effect.matched_stats(), effect.max_multiplier);
        }
        (None, None) => {}
    }

    if let Some(modifier) = modifier {
        if !modifier.effect.is_recognized() {
            warn!(
                modifier = %modifier.name,
                effect = %modifier.effect,
                "unrecognized modifier effect, no bonus applied"
            );
        }
        bonuses.credit_all(modifier.effect.targets().iter().copied(), modifier_value);
    }

    bonuses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{Catalog, Modifier, MuseumEffect, Ore, Rarity, RarityTable, TablesOracle};
    use crate::stats::Stat;
    use std::io;
    use std::sync::{Arc, Mutex};
    use strum::IntoEnumIterator;

    /// Log sink shared between a test and its subscriber.
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("capture buffer").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Quarter steps keep every sum exact in binary floating point.
    fn quarter_table() -> RarityTable {
        RarityTable::from_entries(Rarity::iter().map(|r| (r, (r.as_index() + 1) as f64 * 0.25)))
            .expect("complete table")
    }

    fn catalog() -> Catalog {
        let ores = vec![
            Ore::new("Lucky Stone", Rarity::Common, MuseumEffect::new("Luck", 5.0)),
            Ore::new(
                "Twinite",
                Rarity::Rare,
                MuseumEffect::new("Dig Speed and Shake Speed", 2.0),
            ),
            Ore::with_special_effects("Vault Crystal", Rarity::Epic, [(Stat::Capacity, 10.0)]),
            Ore::with_special_effects(
                "Prism",
                Rarity::Legendary,
                [(Stat::Luck, 1.0), (Stat::SellBoost, 0.5)],
            )
            .labelled(MuseumEffect::new("Dig Strength", 99.0)),
            Ore::new("Shale", Rarity::Uncommon, MuseumEffect::new("Shimmer", 1.0)),
        ];
        let modifiers = vec![
            Modifier::new("Hoarder", "Luck and Capacity"),
            Modifier::new("Tremor", "Dig and Shake Speed"),
            Modifier::new("Swift", "Dig Speed"),
            Modifier::new("Keen", "Luck"),
            Modifier::new("Phase", "Teleportation"),
        ];
        Catalog::new(ores, modifiers, quarter_table()).expect("valid catalog")
    }

    fn only(stat: Stat, value: f64) -> MuseumBonuses {
        let mut expected = MuseumBonuses::new();
        expected.credit(stat, value);
        expected
    }

    #[test]
    fn empty_layout_yields_zero_vector() {
        let bonuses = calculate_museum_bonuses(&catalog(), &[]);
        assert!(bonuses.is_zero());
    }

    #[test]
    fn empty_slots_contribute_nothing() {
        let slots = [Slot::empty(), Slot::empty().modifier("Keen")];
        assert!(calculate_museum_bonuses(&catalog(), &slots).is_zero());
    }

    #[test]
    fn single_stat_ore_without_modifier() {
        let slots = [Slot::with_ore("Lucky Stone")];
        let bonuses = calculate_museum_bonuses(&catalog(), &slots);
        assert_eq!(bonuses, only(Stat::Luck, 5.0));
    }

    #[test]
    fn unknown_ore_is_skipped_without_affecting_others() {
        let catalog = catalog();
        let with_unknown = [
            Slot::with_ore("Unobtainium").modifier("Keen"),
            Slot::with_ore("Lucky Stone"),
        ];
        let without = [Slot::with_ore("Lucky Stone")];

        assert_eq!(
            calculate_museum_bonuses(&catalog, &with_unknown),
            calculate_museum_bonuses(&catalog, &without)
        );
    }

    #[test]
    fn unknown_modifier_leaves_only_base_effect() {
        let slots = [Slot::with_ore("Lucky Stone").modifier("Nonexistent")];
        let bonuses = calculate_museum_bonuses(&catalog(), &slots);
        assert_eq!(bonuses, only(Stat::Luck, 5.0));

        // Special-effect ores get no rarity add-on from an unresolved modifier either
        let slots = [Slot::with_ore("Vault Crystal").modifier("Nonexistent")];
        let bonuses = calculate_museum_bonuses(&catalog(), &slots);
        assert_eq!(bonuses, only(Stat::Capacity, 10.0));
    }

    #[test]
    fn multi_match_label_credits_each_stat() {
        let slots = [Slot::with_ore("Twinite")];
        let bonuses = calculate_museum_bonuses(&catalog(), &slots);

        assert_eq!(bonuses.dig_speed, 2.0);
        assert_eq!(bonuses.shake_speed, 2.0);
        assert_eq!(bonuses.dig_strength, 0.0);
        assert_eq!(bonuses.shake_strength, 0.0);
    }

    #[test]
    fn unmatched_label_contributes_nothing() {
        let slots = [Slot::with_ore("Shale")];
        assert!(calculate_museum_bonuses(&catalog(), &slots).is_zero());
    }

    #[test]
    fn modifier_adds_rarity_bonus_to_its_category() {
        // Rare → 0.75
        let slots = [Slot::with_ore("Twinite").modifier("Swift")];
        let bonuses = calculate_museum_bonuses(&catalog(), &slots);

        assert_eq!(bonuses.dig_speed, 2.75);
        assert_eq!(bonuses.shake_speed, 2.0);
    }

    #[test]
    fn compound_category_adds_full_value_to_both_stats() {
        // Common → 0.25
        let slots = [Slot::with_ore("Lucky Stone").modifier("Tremor")];
        let bonuses = calculate_museum_bonuses(&catalog(), &slots);

        assert_eq!(bonuses.luck, 5.0);
        assert_eq!(bonuses.dig_speed, 0.25);
        assert_eq!(bonuses.shake_speed, 0.25);
    }

    #[test]
    fn special_effects_receive_rarity_bonus_twice() {
        // Epic → B = 1.0
        let catalog = catalog();
        let b = catalog.rarity_bonus(Rarity::Epic);
        let slots = [Slot::with_ore("Vault Crystal").modifier("Hoarder")];
        let bonuses = calculate_museum_bonuses(&catalog, &slots);

        assert_eq!(bonuses.capacity, 10.0 + 2.0 * b);
        assert_eq!(bonuses.luck, b);
        assert_eq!(bonuses.iter().filter(|(_, v)| *v != 0.0).count(), 2);
    }

    #[test]
    fn special_effects_replace_museum_effect() {
        // Legendary → 1.25; label "Dig Strength" must be ignored
        let slots = [Slot::with_ore("Prism")];
        let bonuses = calculate_museum_bonuses(&catalog(), &slots);
        assert_eq!(bonuses.dig_strength, 0.0);
        assert_eq!(bonuses.luck, 1.0);
        assert_eq!(bonuses.sell_boost, 0.5);

        let slots = [Slot::with_ore("Prism").modifier("Swift")];
        let bonuses = calculate_museum_bonuses(&catalog(), &slots);
        assert_eq!(bonuses.luck, 2.25);
        assert_eq!(bonuses.sell_boost, 1.75);
        assert_eq!(bonuses.dig_speed, 1.25);
    }

    #[test]
    fn unrecognized_effect_matches_omitting_the_modifier() {
        let catalog = catalog();
        let with_phase = [Slot::with_ore("Lucky Stone").modifier("Phase")];
        let without = [Slot::with_ore("Lucky Stone")];

        assert_eq!(
            calculate_museum_bonuses(&catalog, &with_phase),
            calculate_museum_bonuses(&catalog, &without)
        );
    }

    #[test]
    fn result_is_independent_of_slot_order() {
        let catalog = catalog();
        let slots = vec![
            Slot::with_ore("Lucky Stone").modifier("Keen"),
            Slot::with_ore("Twinite").modifier("Tremor"),
            Slot::with_ore("Vault Crystal").modifier("Hoarder"),
            Slot::empty(),
            Slot::with_ore("Prism").modifier("Phase"),
            Slot::with_ore("Missing"),
        ];
        let expected = calculate_museum_bonuses(&catalog, &slots);

        let mut rotated = slots.clone();
        for _ in 0..slots.len() {
            rotated.rotate_left(1);
            assert_eq!(calculate_museum_bonuses(&catalog, &rotated), expected);
        }

        let mut reversed = slots;
        reversed.reverse();
        assert_eq!(calculate_museum_bonuses(&catalog, &reversed), expected);
    }

    #[test]
    fn repeated_ores_accumulate() {
        let slots = [Slot::with_ore("Lucky Stone"), Slot::with_ore("Lucky Stone")];
        let bonuses = calculate_museum_bonuses(&catalog(), &slots);
        assert_eq!(bonuses.luck, 10.0);
    }

    #[test]
    fn aggregation_does_not_touch_inputs() {
        let catalog = catalog();
        let before = catalog.clone();
        let slots = vec![Slot::with_ore("Vault Crystal").modifier("Hoarder")];
        let snapshot = slots.clone();

        let _ = calculate_museum_bonuses(&catalog, &slots);

        assert_eq!(slots, snapshot);
        assert_eq!(catalog.ores(), before.ores());
    }

    #[test]
    fn inexact_category_spellings_contribute_nothing() {
        // Common → 0.25; neither spelling is a category name
        let catalog = Catalog::new(
            vec![Ore::new("Lucky Stone", Rarity::Common, MuseumEffect::new("Luck", 2.0))],
            vec![
                Modifier::new("Lowercase", "dig speed"),
                Modifier::new("Shouty", "  LUCK "),
            ],
            quarter_table(),
        )
        .expect("valid catalog");

        let slots = [
            Slot::with_ore("Lucky Stone").modifier("Lowercase"),
            Slot::with_ore("Lucky Stone").modifier("Shouty"),
        ];
        let bonuses = calculate_museum_bonuses(&catalog, &slots);

        assert_eq!(bonuses, only(Stat::Luck, 4.0));
        assert_eq!(catalog.warnings().len(), 2);
    }

    #[test]
    fn unrecognized_effect_logs_a_warning_naming_it() {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&captured);
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || CaptureWriter(Arc::clone(&sink)))
            .with_ansi(false)
            .finish();

        let catalog = catalog();
        let bonuses = tracing::subscriber::with_default(subscriber, || {
            calculate_museum_bonuses(&catalog, &[Slot::with_ore("Lucky Stone").modifier("Phase")])
        });
        assert_eq!(bonuses, only(Stat::Luck, 5.0));

        let output = String::from_utf8(captured.lock().expect("capture buffer").clone())
            .expect("utf-8 log output");
        let warnings: Vec<_> = output.lines().filter(|line| line.contains("WARN")).collect();
        assert_eq!(warnings.len(), 1, "{output}");
        assert!(warnings[0].contains("Teleportation"), "{output}");
        assert!(warnings[0].contains("Phase"), "{output}");
    }

    #[test]
    fn recognized_effects_log_nothing() {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&captured);
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || CaptureWriter(Arc::clone(&sink)))
            .with_ansi(false)
            .finish();

        let catalog = catalog();
        tracing::subscriber::with_default(subscriber, || {
            calculate_museum_bonuses(&catalog, &[Slot::with_ore("Twinite").modifier("Tremor")])
        });

        assert!(captured.lock().expect("capture buffer").is_empty());
    }

    #[test]
    fn works_through_a_trait_object() {
        let catalog = catalog();
        let oracle: &dyn MuseumOracle = &catalog;
        let bonuses = calculate_museum_bonuses(oracle, &[Slot::with_ore("Lucky Stone")]);
        assert_eq!(bonuses.luck, 5.0);
    }
}
