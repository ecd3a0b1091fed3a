//! Museum layout loader.
//!
//! A layout lists the slots of one museum. RON and TOML are both accepted,
//! chosen by file extension:
//!
//! ```ron
//! (slots: [(ore: "Emerald", modifier: "Shiny"), (ore: "Jade"), ()])
//! ```
//!
//! ```toml
//! [[slots]]
//! ore = "Emerald"
//! modifier = "Shiny"
//! ```

use std::path::{Path, PathBuf};

use museum_core::{ErrorSeverity, GameError, ModifierOracle, OreOracle, Slot};
use ron::extensions::Extensions;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Slots of one museum, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MuseumLayout {
    #[serde(default)]
    pub slots: Vec<Slot>,
}

impl MuseumLayout {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// Slot references that do not resolve against `catalog`.
    ///
    /// The engine ignores these silently; front ends can surface them.
    pub fn unresolved<C>(&self, catalog: &C) -> Vec<LayoutError>
    where
        C: OreOracle + ModifierOracle + ?Sized,
    {
        let mut findings = Vec::new();
        for (index, slot) in self.slots.iter().enumerate() {
            let Some(ore) = slot.ore.as_deref() else {
                continue;
            };
            if catalog.ore(ore).is_none() {
                findings.push(LayoutError::UnknownOre {
                    slot: index,
                    name: ore.to_owned(),
                });
            }
            if let Some(modifier) = slot.modifier.as_deref()
                && catalog.modifier(modifier).is_none()
            {
                findings.push(LayoutError::UnknownModifier {
                    slot: index,
                    name: modifier.to_owned(),
                });
            }
        }
        findings
    }
}

/// Layout file problems.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("unsupported layout format for {}: expected .ron or .toml", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("slot {slot}: unknown ore '{name}'")]
    UnknownOre { slot: usize, name: String },

    #[error("slot {slot}: unknown modifier '{name}'")]
    UnknownModifier { slot: usize, name: String },
}

impl GameError for LayoutError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnsupportedFormat { .. } => ErrorSeverity::Validation,
            Self::UnknownOre { .. } | Self::UnknownModifier { .. } => ErrorSeverity::Warning,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat { .. } => "LAYOUT_UNSUPPORTED_FORMAT",
            Self::UnknownOre { .. } => "LAYOUT_UNKNOWN_ORE",
            Self::UnknownModifier { .. } => "LAYOUT_UNKNOWN_MODIFIER",
        }
    }
}

/// Layout file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutFormat {
    Ron,
    Toml,
}

impl LayoutFormat {
    /// Picks a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, LayoutError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("ron") => Ok(Self::Ron),
            Some("toml") => Ok(Self::Toml),
            _ => Err(LayoutError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Loader for museum layouts.
pub struct LayoutLoader;

impl LayoutLoader {
    pub fn load(path: &Path) -> LoadResult<MuseumLayout> {
        let format = LayoutFormat::from_path(path)?;
        let content = read_file(path)?;
        Self::parse(&content, format)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse a layout. RON layouts may omit `Some(..)` around slot names.
    pub fn parse(content: &str, format: LayoutFormat) -> LoadResult<MuseumLayout> {
        match format {
            LayoutFormat::Ron => ron::Options::default()
                .with_default_extension(Extensions::IMPLICIT_SOME)
                .from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse layout RON: {}", e)),
            LayoutFormat::Toml => toml::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse layout TOML: {}", e)),
        }
    }
}
