//! Error types for board operations.

use super::direction::Direction;
use super::ids::{BucketId, CardId};

/// Error returned by card and bucket operations.
///
/// Every variant is raised before any state is touched, so a failed call
/// leaves the board exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The card has not been placed in a bucket yet.
    #[error("{card} has no parent bucket")]
    NoParent { card: CardId },

    /// There is no bucket in the requested direction.
    #[error("{bucket} has no neighbour to the {direction}")]
    NoNeighbor { bucket: BucketId, direction: Direction },

    #[error("unknown card: {0}")]
    UnknownCard(CardId),

    #[error("unknown bucket: {0}")]
    UnknownBucket(BucketId),

    /// The bucket asked to shift a card does not contain it.
    #[error("{card} is not in {bucket}")]
    NotInBucket { card: CardId, bucket: BucketId },

    /// The card already belongs to a bucket.
    #[error("{card} is already placed in {bucket}")]
    AlreadyPlaced { card: CardId, bucket: BucketId },

    #[error("no card ids left to allocate")]
    CardIdsExhausted,

    #[error("no bucket ids left to allocate")]
    BucketIdsExhausted,
}

impl MoveError {
    /// A precondition on the card itself was not met.
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(self, MoveError::NoParent { .. } | MoveError::AlreadyPlaced { .. })
    }

    /// The move ran off the edge of the board.
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        matches!(self, MoveError::NoNeighbor { .. })
    }
}

/// A violation of the card/bucket membership invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsistencyError {
    #[error("{card} is listed in {bucket} but its parent is {parent:?}")]
    ParentMismatch {
        card: CardId,
        bucket: BucketId,
        parent: Option<BucketId>,
    },

    #[error("{card} is listed more than once")]
    Duplicate { card: CardId },

    #[error("{bucket} lists {card}, which does not exist")]
    Dangling { card: CardId, bucket: BucketId },

    #[error("{card} claims parent {bucket} but is not listed there")]
    Orphaned { card: CardId, bucket: BucketId },

    #[error("{bucket} appears more than once in the layout")]
    DuplicateBucket { bucket: BucketId },

    /// A card record is stored under another card's ID.
    #[error("{card} is stored under key {key}")]
    KeyMismatch { key: CardId, card: CardId },

    /// The card counter would hand out an ID that is already taken.
    #[error("{card} exists but the next card id is {next}")]
    StaleCardCounter { card: CardId, next: u32 },

    #[error("{bucket} exists but the next bucket id is {next}")]
    StaleBucketCounter { bucket: BucketId, next: u16 },
}

/// Error returned when encoding or restoring a board snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("inconsistent snapshot: {0}")]
    Inconsistent(#[from] ConsistencyError),
}
