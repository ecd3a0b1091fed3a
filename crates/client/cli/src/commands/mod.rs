//! Command implementations for the museum CLI
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod calc;
mod modifiers;
mod ores;
mod validate;

pub use calc::Calc;
pub use modifiers::Modifiers;
pub use ores::Ores;
pub use validate::Validate;

use std::borrow::Cow;
use std::path::Path;

use anyhow::Result;
use museum_content::{ContentFactory, builtin_catalog};
use museum_core::{Catalog, MuseumEffect, Ore, format_percent};

/// Loads the catalog from `data_dir`, or the built-in one when unset.
fn load_catalog(data_dir: Option<&Path>) -> Result<Cow<'static, Catalog>> {
    match data_dir {
        Some(dir) => ContentFactory::new(dir).load_catalog().map(Cow::Owned),
        None => builtin_catalog().map(Cow::Borrowed),
    }
}

/// One-line description of what an ore adds to the museum.
fn describe_ore(ore: &Ore) -> String {
    if let Some(effects) = &ore.special_effects {
        return effects
            .iter()
            .map(|(stat, value)| format!("{} {}", stat.label(), format_percent(*value)))
            .collect::<Vec<_>>()
            .join(", ");
    }

    match &ore.museum_effect {
        Some(MuseumEffect {
            stat,
            max_multiplier,
        }) => format!("{} {}", stat, format_percent(*max_multiplier)),
        None => String::new(),
    }
}
