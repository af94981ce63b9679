use core::str::FromStr;

use serde::{Deserialize, Serialize};

use playbill_core::BillingError;

/// Play kinds with dedicated pricing rules.
///
/// The set is closed: a new kind is a deliberate, reviewed change to the
/// pricing rules, not an open extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayKind {
    Tragedy,
    Comedy,
}

impl PlayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayKind::Tragedy => "tragedy",
            PlayKind::Comedy => "comedy",
        }
    }
}

impl core::fmt::Display for PlayKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayKind {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tragedy" => Ok(PlayKind::Tragedy),
            "comedy" => Ok(PlayKind::Comedy),
            other => Err(BillingError::unknown_kind(other)),
        }
    }
}

/// Play metadata: display name plus the kind driving pricing.
///
/// The kind is kept as the externally supplied string (serialized as
/// `"type"`, matching the catalog wire format); the pricing rules parse it
/// into [`PlayKind`], so an unsupported kind fails when the play is priced,
/// not when the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Play {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}
