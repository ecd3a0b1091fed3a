//! List the modifier catalog.

use anyhow::Result;
use clap::Parser;
use console::style;

use super::load_catalog;
use crate::config::CliConfig;

/// List the modifier catalog
#[derive(Parser, Debug)]
pub struct Modifiers {}

impl Modifiers {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let catalog = load_catalog(config.data_dir.as_deref())?;

        for modifier in catalog.modifiers() {
            let targets: Vec<_> = modifier
                .effect
                .targets()
                .iter()
                .map(|stat| stat.label())
                .collect();

            if targets.is_empty() {
                println!(
                    "  {:<14} {} {}",
                    modifier.name,
                    modifier.effect,
                    style("(no bonus)").yellow()
                );
            } else {
                println!(
                    "  {:<14} {} {}",
                    modifier.name,
                    modifier.effect,
                    style(format!("-> {}", targets.join(", "))).dim()
                );
            }
        }

        Ok(())
    }
}
