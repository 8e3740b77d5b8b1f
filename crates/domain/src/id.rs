//! Opaque identifier newtype for game entries.
//!
//! Identifiers are assigned by the document store, not by this system, so
//! they are carried as opaque strings. No format validation is performed
//! anywhere: an id that matches nothing in the store simply produces a
//! not-found outcome.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Game`](crate::game::Game) entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Wrap a raw identifier string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Access the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for GameId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for GameId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}
