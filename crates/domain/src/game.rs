//! Game entry — a document in the "game of the year" collection.
//!
//! Documents are schemaless on the store side: besides the title and the
//! vote counter they may carry arbitrary fields. Those are kept verbatim in
//! an open extension map so that reads are a lossless projection of storage.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::id::GameId;

/// A single game entry.
///
/// Serialized field names follow the store schema (`nombre`, `votos`);
/// unknown fields round-trip through [`Game::extra`] untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Opaque identifier, assigned outside this system.
    pub id: GameId,
    /// Display title.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Vote counter. Only ever incremented by this system.
    #[serde(rename = "votos")]
    pub votes: u64,
    /// Every other stored field, passed through unmodified.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Game {
    /// Create an entry with no extension fields.
    #[must_use]
    pub fn new(id: impl Into<GameId>, name: impl Into<String>, votes: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            votes,
            extra: BTreeMap::new(),
        }
    }

    /// Attach an extension field, returning the modified entry.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
