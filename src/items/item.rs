use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique, immutable identifier of an item.
///
/// Persisted as a plain number (milliseconds since the Unix epoch at
/// creation time).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKey(pub u64);

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub key: ItemKey,
    pub text: String,
    /// Records saved without the flag load as active.
    #[serde(default)]
    pub complete: bool,
    /// Row is being edited in place. Never persisted.
    #[serde(skip)]
    pub editing: bool,
}

impl Item {
    pub fn new(key: ItemKey, text: impl Into<String>) -> Self {
        Self {
            key,
            text: text.into(),
            complete: false,
            editing: false,
        }
    }
}

/// Which subset of the items is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
        }
    }

    /// Tab label in the footer.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// All variants in display order.
    pub fn all() -> &'static [FilterMode] {
        &[Self::All, Self::Active, Self::Completed]
    }

    /// Parse a mode name, ignoring case. Unknown names return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ALL" => Some(Self::All),
            "ACTIVE" => Some(Self::Active),
            "COMPLETED" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Next mode in display order, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Active,
            Self::Active => Self::Completed,
            Self::Completed => Self::All,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
