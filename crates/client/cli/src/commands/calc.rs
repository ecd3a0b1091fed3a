//! Compute museum bonuses for a layout file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use museum_content::LayoutLoader;
use museum_core::{MuseumBonuses, format_percent};

use super::load_catalog;
use crate::config::CliConfig;

/// Compute the bonuses of a museum layout
#[derive(Parser, Debug)]
pub struct Calc {
    /// Layout file (.ron or .toml)
    #[arg(value_name = "LAYOUT")]
    layout: PathBuf,

    /// Print the bonus vector as JSON
    #[arg(long)]
    json: bool,
}

impl Calc {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let catalog = load_catalog(config.data_dir.as_deref())?;
        let layout = LayoutLoader::load(&self.layout)?;

        for finding in layout.unresolved(catalog.as_ref()) {
            eprintln!("{} {}", style("!").yellow().bold(), finding);
        }

        let bonuses = catalog.aggregate(&layout.slots);
        tracing::debug!(slots = layout.slots.len(), "museum aggregated");

        if self.json {
            let json = serde_json::to_string_pretty(&bonuses)
                .context("Failed to serialize bonuses as JSON")?;
            println!("{json}");
        } else {
            println!(
                "{} {} ({} slots)",
                style("Museum:").bold().cyan(),
                self.layout.display(),
                layout.slots.len()
            );
            println!();
            print_bonuses(&bonuses);
        }

        Ok(())
    }
}

fn print_bonuses(bonuses: &MuseumBonuses) {
    for (stat, value) in bonuses.iter() {
        let label = format!("{:<16}", stat.label());
        let percent = format_percent(value);
        if value == 0.0 {
            println!("  {} {}", style(label).dim(), style(percent).dim());
        } else {
            println!("  {} {}", style(label).bold(), style(percent).green());
        }
    }
}
