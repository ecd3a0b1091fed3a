//! Validate a catalog data directory.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use museum_core::GameError;

use super::load_catalog;
use crate::config::CliConfig;

/// Check that a data directory loads and validates
#[derive(Parser, Debug)]
pub struct Validate {
    /// Data directory with ores.ron, modifiers.ron and tables.toml
    /// (defaults to MUSEUM_DATA_DIR, then the built-in catalog)
    #[arg(value_name = "DIR")]
    dir: Option<PathBuf>,
}

impl Validate {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let dir = self.dir.or_else(|| config.data_dir.clone());
        let source = dir
            .as_ref()
            .map_or_else(|| "built-in catalog".to_string(), |d| d.display().to_string());

        let catalog = load_catalog(dir.as_deref())?;
        let warnings = catalog.warnings();

        println!(
            "{} {}: {} ores, {} modifiers",
            style("✓").green().bold(),
            source,
            catalog.ores().len(),
            catalog.modifiers().len()
        );
        for warning in &warnings {
            println!(
                "  {} [{}] {}",
                style(warning.severity().as_str()).yellow(),
                warning.error_code(),
                warning
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_builtin_catalog_by_default() {
        let cmd = Validate { dir: None };
        cmd.execute(&CliConfig::default()).expect("built-in catalog validates");
    }

    #[test]
    fn empty_directory_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cmd = Validate {
            dir: Some(dir.path().to_path_buf()),
        };
        assert!(cmd.execute(&CliConfig::default()).is_err());
    }
}
