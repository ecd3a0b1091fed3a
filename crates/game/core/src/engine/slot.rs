/// One museum display position.
///
/// Both references are catalog names. A modifier only matters when an ore is
/// present; names that do not resolve are ignored by the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub ore: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub modifier: Option<String>,
}

impl Slot {
    /// An unoccupied display position.
    pub const fn empty() -> Self {
        Self {
            ore: None,
            modifier: None,
        }
    }

    /// A slot holding `ore` with no modifier.
    pub fn with_ore(ore: impl Into<String>) -> Self {
        Self {
            ore: Some(ore.into()),
            modifier: None,
        }
    }

    /// Attaches a modifier (builder pattern).
    #[must_use]
    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.ore.is_none()
    }
}
