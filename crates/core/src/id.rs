//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};

/// Identifier of a play in the catalog.
///
/// Play ids are externally assigned string keys (e.g. `"hamlet"`); the id
/// carries no structure of its own, so any string is a valid id. Whether it
/// resolves to a play is decided by the catalog at lookup time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayId(String);

impl PlayId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PlayId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for PlayId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PlayId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
