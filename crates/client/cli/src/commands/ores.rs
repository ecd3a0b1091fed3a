//! List the ore catalog.

use anyhow::Result;
use clap::Parser;
use console::style;
use museum_core::{Rarity, format_percent};
use strum::IntoEnumIterator;

use super::{describe_ore, load_catalog};
use crate::config::CliConfig;

/// List the ore catalog
#[derive(Parser, Debug)]
pub struct Ores {
    /// Only show ores of this rarity (e.g. rare, legendary)
    #[arg(short, long, value_name = "RARITY", value_parser = parse_rarity)]
    rarity: Option<Rarity>,
}

fn parse_rarity(value: &str) -> Result<Rarity, String> {
    value.parse().map_err(|_| {
        let known: Vec<_> = Rarity::iter().map(|r| r.to_string()).collect();
        format!("unknown rarity '{value}' (expected one of {})", known.join(", "))
    })
}

impl Ores {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let catalog = load_catalog(config.data_dir.as_deref())?;

        let tiers: Vec<Rarity> = match self.rarity {
            Some(rarity) => vec![rarity],
            None => Rarity::iter().collect(),
        };

        for rarity in tiers {
            let ores: Vec<_> = catalog.ores_by_rarity(rarity).collect();
            if ores.is_empty() {
                continue;
            }

            println!(
                "{} {}",
                style(rarity).bold().cyan(),
                style(format!(
                    "(modifier bonus {})",
                    format_percent(catalog.tables().bonus(rarity))
                ))
                .dim()
            );
            for ore in ores {
                let marker = if ore.has_special_effects() { "*" } else { " " };
                println!(
                    " {}{:<18} {}",
                    style(marker).magenta(),
                    ore.name,
                    describe_ore(ore)
                );
            }
            println!();
        }

        Ok(())
    }
}
