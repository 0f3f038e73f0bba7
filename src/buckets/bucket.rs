//! Buckets: ordered card sequences.
//!
//! A `Bucket` is one column of the board. It only stores card handles, in
//! display order. Index 0 is the top of the column.
//!
//! Mutation is crate-private. Inserting or removing a card without updating
//! the card's parent would break membership, so only the board does it.

use serde::{Deserialize, Serialize};

use crate::core::config::CardPosition;
use crate::core::ids::{BucketId, CardId};

/// One column of the board.
///
/// ## Usage
///
/// ```
/// use rust_kanban::board::Board;
/// use rust_kanban::core::BoardConfig;
///
/// let mut board = Board::from_config(BoardConfig::kanban()).unwrap();
/// let todo = board.bucket_by_name("Todo").unwrap();
///
/// let a = board.add_card_to(todo, "A", "").unwrap();
/// let b = board.add_card_to(todo, "B", "").unwrap();
///
/// let bucket = board.bucket(todo).unwrap();
/// assert_eq!(bucket.cards(), &[a, b]);
/// assert_eq!(bucket.top_card(), Some(a));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    id: BucketId,
    name: String,
    cards: Vec<CardId>,
}

impl Bucket {
    /// Create an empty bucket.
    #[must_use]
    pub fn new(id: BucketId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cards: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> BucketId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards in display order, top first.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    /// Index of a card in this bucket.
    #[must_use]
    pub fn position(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    #[must_use]
    pub fn top_card(&self) -> Option<CardId> {
        self.cards.first().copied()
    }

    #[must_use]
    pub fn bottom_card(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// Insert a card at the given position. Returns the index used.
    pub(crate) fn insert(&mut self, card: CardId, position: CardPosition) -> usize {
        let idx = position.resolve(self.cards.len());
        self.cards.insert(idx, card);
        idx
    }

    /// Remove a card. Returns its former index, or `None` if absent.
    pub(crate) fn remove(&mut self, card: CardId) -> Option<usize> {
        let idx = self.position(card)?;
        self.cards.remove(idx);
        Some(idx)
    }
}
