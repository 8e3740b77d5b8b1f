//! Vote receipt — the confirmation produced by a successful vote.

/// Confirmation that one vote was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteReceipt {
    /// Display title of the game that received the vote.
    pub name: String,
}

impl VoteReceipt {
    /// The confirmation message shown to the voter.
    #[must_use]
    pub fn mensaje(&self) -> String {
        format!("Gracias por tu voto al juego '{}'", self.name)
    }
}
