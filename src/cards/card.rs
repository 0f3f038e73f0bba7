//! Card records.
//!
//! A `Card` holds its text and a handle to the bucket that currently lists
//! it. The handle is non-owning: the bucket owns membership, the card only
//! caches where to send move requests.
//!
//! Parent reassignment is crate-private. The only callers are board
//! operations that update the bucket's sequence in the same step, which
//! is what keeps the two sides from disagreeing.

use serde::{Deserialize, Serialize};

use crate::core::direction::Direction;
use crate::core::error::MoveError;
use crate::core::ids::{BucketId, CardId};

/// A single task on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    title: String,
    description: String,
    parent: Option<BucketId>,
}

/// A move request routed through a card to its parent bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShiftRequest {
    /// The bucket that must perform the shift.
    pub bucket: BucketId,
    /// The card being shifted.
    pub card: CardId,
    pub direction: Direction,
}

impl Card {
    /// Create an unplaced card.
    #[must_use]
    pub fn new(id: CardId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            parent: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The bucket currently listing this card, if any.
    #[must_use]
    pub fn parent(&self) -> Option<BucketId> {
        self.parent
    }

    /// Check if the card has been placed in a bucket.
    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.parent.is_some()
    }

    /// Point the card at a new parent bucket.
    ///
    /// Pure bookkeeping: bucket membership is not touched.
    pub(crate) fn reassign_parent(&mut self, bucket: BucketId) {
        tracing::trace!(card = %self.id, from = ?self.parent, to = %bucket, "reassign parent");
        self.parent = Some(bucket);
    }

    /// Forget the parent after the bucket has dropped the card.
    pub(crate) fn detach(&mut self) {
        self.parent = None;
    }

    /// Build the request that asks the parent bucket to move this card.
    ///
    /// Fails with `MoveError::NoParent` for an unplaced card.
    pub fn route(&self, direction: Direction) -> Result<ShiftRequest, MoveError> {
        let bucket = self.parent.ok_or(MoveError::NoParent { card: self.id })?;
        Ok(ShiftRequest {
            bucket,
            card: self.id,
            direction,
        })
    }
}
