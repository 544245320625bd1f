//! App Registry
//!
//! The fixed, ordered set of mini-apps the shell can display. Keys form a
//! closed enum, so every lookup is total and the active selection can never
//! point at a missing entry.

mod content;

use crate::config::AppOverride;
use crate::error::{Result, ShellError};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Identifier of an embedded mini-app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AppKey {
    Espressioni,
    Termometro,
    Mcmmcd,
    Sudoku,
}

impl AppKey {
    /// All keys in menu order
    pub const ALL: [AppKey; 4] = [
        AppKey::Espressioni,
        AppKey::Termometro,
        AppKey::Mcmmcd,
        AppKey::Sudoku,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Espressioni => "espressioni",
            Self::Termometro => "termometro",
            Self::Mcmmcd => "mcmmcd",
            Self::Sudoku => "sudoku",
        }
    }

    /// Position in menu order
    pub fn index(&self) -> usize {
        match self {
            Self::Espressioni => 0,
            Self::Termometro => 1,
            Self::Mcmmcd => 2,
            Self::Sudoku => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn icon(&self) -> Icon {
        match self {
            Self::Espressioni => Icon::CALCULATOR,
            Self::Termometro => Icon::THERMOMETER,
            Self::Mcmmcd => Icon::DIVIDE,
            Self::Sudoku => Icon::GRID,
        }
    }
}

impl Default for AppKey {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for AppKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppKey {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == needle)
            .ok_or_else(|| ShellError::UnknownApp(s.to_string()))
    }
}

/// Menu icon for an app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub name: &'static str,
    /// Single-column glyph drawn in the sidebar
    pub glyph: &'static str,
}

impl Icon {
    pub const CALCULATOR: Icon = Icon {
        name: "calculator",
        glyph: "±",
    };
    pub const THERMOMETER: Icon = Icon {
        name: "thermometer",
        glyph: "°",
    };
    pub const DIVIDE: Icon = Icon {
        name: "divide",
        glyph: "÷",
    };
    pub const GRID: Icon = Icon {
        name: "grid-3x3",
        glyph: "▦",
    };
}

/// A mini-app as the shell sees it: a title and an opaque payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    pub key: AppKey,
    pub title: String,
    pub content: String,
}

/// Read-only registry of mini-apps, one entry per [`AppKey`]
#[derive(Debug, Clone)]
pub struct Registry {
    entries: [AppEntry; 4],
}

impl Registry {
    /// Built-in titles and payloads
    pub fn builtin() -> Self {
        Self {
            entries: AppKey::ALL.map(|key| AppEntry {
                key,
                title: content::default_title(key).to_string(),
                content: content::default_content(key).to_string(),
            }),
        }
    }

    /// Built-in registry with per-app overrides applied.
    ///
    /// Keys in `overrides` that do not name an app are rejected.
    pub fn with_overrides(overrides: &BTreeMap<String, AppOverride>) -> Result<Self> {
        let mut registry = Self::builtin();
        for (raw_key, ovr) in overrides {
            let key: AppKey = raw_key.parse()?;
            let entry = &mut registry.entries[key.index()];

            if let Some(title) = ovr.title.as_deref().filter(|t| !t.trim().is_empty()) {
                entry.title = title.to_string();
            }

            if let Some(ref path) = ovr.content_file {
                entry.content =
                    std::fs::read_to_string(path).map_err(|source| ShellError::ContentRead {
                        key: key.to_string(),
                        path: path.clone(),
                        source,
                    })?;
                tracing::debug!("Loaded content for {} from {:?}", key, path);
            } else if let Some(ref text) = ovr.content {
                entry.content = text.clone();
            }
        }
        Ok(registry)
    }

    pub fn get(&self, key: AppKey) -> &AppEntry {
        &self.entries[key.index()]
    }

    pub fn first(&self) -> AppKey {
        self.entries[0].key
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
