//! Binary board snapshots.
//!
//! A snapshot is the whole board encoded with `bincode`. Restoring
//! re-checks membership and ID allocation, so a tampered or truncated
//! snapshot can never produce a board whose cards and buckets disagree,
//! now or after the next card is added.

use super::model::Board;
use crate::core::error::SnapshotError;

impl Board {
    /// Encode the board.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a board and verify its membership and allocation invariants.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let board: Board = bincode::deserialize(bytes)?;
        board.check_consistency()?;
        tracing::debug!(
            buckets = board.buckets().len(),
            cards = board.card_count(),
            "board restored"
        );
        Ok(board)
    }
}
