use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use playbill_core::{BillingError, BillingResult, PlayId};

use crate::play::Play;

/// Lookup table from play id to play metadata.
///
/// Keys are unique and externally assigned. The catalog is built once by the
/// caller and never mutated during a statement computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    plays: BTreeMap<PlayId, Play>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a play under the given id, returning any replaced entry.
    pub fn insert(&mut self, id: PlayId, play: Play) -> Option<Play> {
        self.plays.insert(id, play)
    }

    pub fn get(&self, id: &PlayId) -> Option<&Play> {
        self.plays.get(id)
    }

    /// Resolve a play id to its metadata.
    ///
    /// An absent id means the invoice data is malformed; the error carries
    /// the id and propagates unchanged through every consumer.
    pub fn resolve(&self, id: &PlayId) -> BillingResult<&Play> {
        self.plays
            .get(id)
            .ok_or_else(|| BillingError::unknown_play(id.as_str()))
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

impl FromIterator<(PlayId, Play)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (PlayId, Play)>>(iter: I) -> Self {
        Self {
            plays: iter.into_iter().collect(),
        }
    }
}
