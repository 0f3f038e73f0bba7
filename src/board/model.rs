//! The board: buckets, card records, and moves between them.
//!
//! `Board` owns every bucket (in left-to-right order) and every card
//! record. It implements the bucket contract the cards route through:
//! - `shift_left` / `shift_right`: move a card from a named bucket to its
//!   neighbour and reassign the card's parent
//! - `move_left` / `move_right`: ask the card for its parent, then shift
//!
//! ## Membership
//!
//! For every bucket `b` and every card `c` listed in `b`,
//! `card(c).parent() == Some(b)`. Cards without a parent are listed
//! nowhere. Every mutating method validates its inputs before touching
//! anything, so a failed call leaves the board unchanged.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::buckets::Bucket;
use crate::cards::{Card, CardView};
use crate::core::config::{BoardConfig, CardPosition, EdgePolicy};
use crate::core::direction::Direction;
use crate::core::error::{ConsistencyError, MoveError};
use crate::core::ids::{BucketId, CardId};

/// Result of a successful shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub card: CardId,
    pub from: BucketId,
    pub to: BucketId,
}

impl MoveOutcome {
    /// Check if the card actually changed bucket.
    ///
    /// `false` for clamped edge moves and wraps on a single-bucket board.
    #[must_use]
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}

/// A Kanban board.
///
/// ## Usage
///
/// ```
/// use rust_kanban::board::Board;
/// use rust_kanban::core::BoardConfig;
///
/// let mut board = Board::from_config(BoardConfig::kanban()).unwrap();
/// let todo = board.bucket_by_name("Todo").unwrap();
/// let doing = board.bucket_by_name("In Progress").unwrap();
///
/// let card = board.add_card_to(todo, "Write spec", "Draft section 4").unwrap();
/// board.move_right(card).unwrap();
///
/// assert_eq!(board.parent_of(card), Some(doing));
/// assert!(board.cards_in(todo).is_empty());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    /// Buckets, left to right.
    pub(crate) buckets: Vec<Bucket>,

    /// Card records: card_id -> card
    pub(crate) cards: FxHashMap<CardId, Card>,

    /// Next card ID to hand out. Every stored card ID is below it.
    pub(crate) next_card: u32,
    /// Next bucket ID to hand out. Every bucket ID is below it.
    pub(crate) next_bucket: u16,

    edge_policy: EdgePolicy,
    shift_position: CardPosition,
}

impl Board {
    /// Create an empty board with default policies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board with the configured buckets and policies.
    ///
    /// Fails only if the config names more buckets than there are IDs.
    pub fn from_config(config: BoardConfig) -> Result<Self, MoveError> {
        let mut board = Self {
            edge_policy: config.edge_policy,
            shift_position: config.shift_position,
            ..Self::default()
        };
        for name in config.buckets {
            board.add_bucket(name)?;
        }
        Ok(board)
    }

    #[must_use]
    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    pub fn set_edge_policy(&mut self, policy: EdgePolicy) {
        self.edge_policy = policy;
    }

    #[must_use]
    pub fn shift_position(&self) -> CardPosition {
        self.shift_position
    }

    pub fn set_shift_position(&mut self, position: CardPosition) {
        self.shift_position = position;
    }

    // === Buckets ===

    /// Append a bucket at the right end of the board.
    pub fn add_bucket(&mut self, name: impl Into<String>) -> Result<BucketId, MoveError> {
        let id = BucketId::new(self.next_bucket);
        self.next_bucket = self
            .next_bucket
            .checked_add(1)
            .ok_or(MoveError::BucketIdsExhausted)?;

        let bucket = Bucket::new(id, name);
        debug!(bucket = %id, name = bucket.name(), "bucket added");
        self.buckets.push(bucket);
        Ok(id)
    }

    /// Buckets in left-to-right order.
    #[must_use]
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    #[must_use]
    pub fn bucket(&self, id: BucketId) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.id() == id)
    }

    /// Find the leftmost bucket with the given name.
    #[must_use]
    pub fn bucket_by_name(&self, name: &str) -> Option<BucketId> {
        self.buckets.iter().find(|b| b.name() == name).map(Bucket::id)
    }

    /// The bucket immediately left of `bucket`, ignoring the edge policy.
    #[must_use]
    pub fn left_of(&self, bucket: BucketId) -> Option<BucketId> {
        self.neighbor(bucket, Direction::Left)
    }

    /// The bucket immediately right of `bucket`, ignoring the edge policy.
    #[must_use]
    pub fn right_of(&self, bucket: BucketId) -> Option<BucketId> {
        self.neighbor(bucket, Direction::Right)
    }

    fn neighbor(&self, bucket: BucketId, direction: Direction) -> Option<BucketId> {
        let idx = self.bucket_index(bucket)?;
        let next = direction.step(idx, self.buckets.len())?;
        Some(self.buckets[next].id())
    }

    fn bucket_index(&self, bucket: BucketId) -> Option<usize> {
        self.buckets.iter().position(|b| b.id() == bucket)
    }

    /// Cards in a bucket, top first. Empty for unknown buckets.
    #[must_use]
    pub fn cards_in(&self, bucket: BucketId) -> &[CardId] {
        self.bucket(bucket).map_or(&[], Bucket::cards)
    }

    // === Cards ===

    /// Create an unplaced card.
    ///
    /// The card has no parent until `place_card` puts it in a bucket.
    pub fn add_card(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<CardId, MoveError> {
        let id = CardId::new(self.next_card);
        self.next_card = self
            .next_card
            .checked_add(1)
            .ok_or(MoveError::CardIdsExhausted)?;

        self.cards.insert(id, Card::new(id, title, description));
        Ok(id)
    }

    /// Create a card and place it at the bottom of `bucket`.
    pub fn add_card_to(
        &mut self,
        bucket: BucketId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<CardId, MoveError> {
        if self.bucket_index(bucket).is_none() {
            return Err(MoveError::UnknownBucket(bucket));
        }
        let card = self.add_card(title, description)?;
        self.place_card(card, bucket, CardPosition::Bottom)?;
        Ok(card)
    }

    /// Insert an unplaced card into a bucket and make it the card's parent.
    ///
    /// Fails with `AlreadyPlaced` if the card already has a parent.
    pub fn place_card(
        &mut self,
        card: CardId,
        bucket: BucketId,
        position: CardPosition,
    ) -> Result<(), MoveError> {
        let idx = self
            .bucket_index(bucket)
            .ok_or(MoveError::UnknownBucket(bucket))?;
        let record = self.cards.get_mut(&card).ok_or(MoveError::UnknownCard(card))?;
        if let Some(parent) = record.parent() {
            return Err(MoveError::AlreadyPlaced { card, bucket: parent });
        }

        let at = self.buckets[idx].insert(card, position);
        record.reassign_parent(bucket);
        debug!(card = %card, bucket = %bucket, index = at, "card placed");

        debug_assert!(self.check_consistency().is_ok());
        Ok(())
    }

    /// Remove a card from the board entirely.
    ///
    /// Returns the detached record.
    pub fn remove_card(&mut self, card: CardId) -> Result<Card, MoveError> {
        let mut record = self.cards.remove(&card).ok_or(MoveError::UnknownCard(card))?;

        if let Some(parent) = record.parent() {
            if let Some(idx) = self.bucket_index(parent) {
                self.buckets[idx].remove(card);
            }
        }
        record.detach();
        debug!(card = %card, "card removed");

        debug_assert!(self.check_consistency().is_ok());
        Ok(record)
    }

    #[must_use]
    pub fn card(&self, card: CardId) -> Option<&Card> {
        self.cards.get(&card)
    }

    /// The bucket listing `card`, or `None` if unplaced or unknown.
    #[must_use]
    pub fn parent_of(&self, card: CardId) -> Option<BucketId> {
        self.cards.get(&card)?.parent()
    }

    /// Total number of cards, placed or not.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Cards that have not been placed in any bucket, in ID order.
    #[must_use]
    pub fn unplaced_cards(&self) -> Vec<CardId> {
        let mut unplaced: Vec<_> = self
            .cards
            .values()
            .filter(|c| !c.is_placed())
            .map(Card::id)
            .collect();
        unplaced.sort_unstable();
        unplaced
    }

    /// Title and description of a card, for an individual view.
    pub fn view(&self, card: CardId) -> Result<CardView, MoveError> {
        self.cards
            .get(&card)
            .map(CardView::from)
            .ok_or(MoveError::UnknownCard(card))
    }

    // === Moves ===

    /// Move a card one bucket to the left of its parent.
    pub fn move_left(&mut self, card: CardId) -> Result<MoveOutcome, MoveError> {
        self.move_card(card, Direction::Left)
    }

    /// Move a card one bucket to the right of its parent.
    pub fn move_right(&mut self, card: CardId) -> Result<MoveOutcome, MoveError> {
        self.move_card(card, Direction::Right)
    }

    /// Route a move through the card to its parent bucket.
    pub fn move_card(&mut self, card: CardId, direction: Direction) -> Result<MoveOutcome, MoveError> {
        let record = self.cards.get(&card).ok_or(MoveError::UnknownCard(card))?;
        let request = record.route(direction).inspect_err(|_| {
            debug!(card = %card, %direction, "move rejected: card has no parent");
        })?;
        self.shift(request.bucket, request.card, request.direction)
    }

    /// Shift `card` out of `bucket` into the bucket on its left.
    pub fn shift_left(&mut self, bucket: BucketId, card: CardId) -> Result<MoveOutcome, MoveError> {
        self.shift(bucket, card, Direction::Left)
    }

    /// Shift `card` out of `bucket` into the bucket on its right.
    pub fn shift_right(&mut self, bucket: BucketId, card: CardId) -> Result<MoveOutcome, MoveError> {
        self.shift(bucket, card, Direction::Right)
    }

    /// Remove `card` from `bucket`, insert it into the neighbour in
    /// `direction` and reassign its parent.
    ///
    /// At the edge of the board the configured `EdgePolicy` applies.
    pub fn shift(
        &mut self,
        bucket: BucketId,
        card: CardId,
        direction: Direction,
    ) -> Result<MoveOutcome, MoveError> {
        let from_idx = self
            .bucket_index(bucket)
            .ok_or(MoveError::UnknownBucket(bucket))?;
        let record = self.cards.get_mut(&card).ok_or(MoveError::UnknownCard(card))?;
        if !self.buckets[from_idx].contains(card) {
            return Err(MoveError::NotInBucket { card, bucket });
        }

        let stay = MoveOutcome {
            card,
            from: bucket,
            to: bucket,
        };
        let len = self.buckets.len();
        let to_idx = match direction.step(from_idx, len) {
            Some(idx) => idx,
            None => match self.edge_policy {
                EdgePolicy::Reject => {
                    debug!(card = %card, bucket = %bucket, %direction, "move rejected: no neighbour");
                    return Err(MoveError::NoNeighbor { bucket, direction });
                }
                EdgePolicy::Clamp => {
                    debug!(card = %card, bucket = %bucket, %direction, "move clamped at edge");
                    return Ok(stay);
                }
                EdgePolicy::Wrap => direction.wrap(len),
            },
        };
        if to_idx == from_idx {
            return Ok(stay);
        }

        let to = self.buckets[to_idx].id();
        self.buckets[from_idx].remove(card);
        let at = self.buckets[to_idx].insert(card, self.shift_position);
        record.reassign_parent(to);
        debug!(card = %card, from = %bucket, to = %to, index = at, "card shifted");

        debug_assert!(self.check_consistency().is_ok());
        Ok(MoveOutcome {
            card,
            from: bucket,
            to,
        })
    }

    // === Invariants ===

    /// Verify that bucket membership and card parents agree.
    ///
    /// Also checks the ID bookkeeping membership depends on: unique bucket
    /// IDs, card map keys matching their records, and both counters above
    /// every ID already handed out.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        self.check_allocation()?;

        let mut listed = FxHashSet::default();

        for bucket in &self.buckets {
            for &card in bucket.cards() {
                if !listed.insert(card) {
                    return Err(ConsistencyError::Duplicate { card });
                }
                let record = self.cards.get(&card).ok_or(ConsistencyError::Dangling {
                    card,
                    bucket: bucket.id(),
                })?;
                if record.parent() != Some(bucket.id()) {
                    return Err(ConsistencyError::ParentMismatch {
                        card,
                        bucket: bucket.id(),
                        parent: record.parent(),
                    });
                }
            }
        }

        for record in self.cards.values() {
            if let Some(parent) = record.parent() {
                if !listed.contains(&record.id()) {
                    return Err(ConsistencyError::Orphaned {
                        card: record.id(),
                        bucket: parent,
                    });
                }
            }
        }

        Ok(())
    }

    fn check_allocation(&self) -> Result<(), ConsistencyError> {
        let mut seen = FxHashSet::default();
        for bucket in &self.buckets {
            let id = bucket.id();
            if !seen.insert(id) {
                return Err(ConsistencyError::DuplicateBucket { bucket: id });
            }
            if id.raw() >= self.next_bucket {
                return Err(ConsistencyError::StaleBucketCounter {
                    bucket: id,
                    next: self.next_bucket,
                });
            }
        }

        for (&key, record) in &self.cards {
            if key != record.id() {
                return Err(ConsistencyError::KeyMismatch {
                    key,
                    card: record.id(),
                });
            }
            if key.raw() >= self.next_card {
                return Err(ConsistencyError::StaleCardCounter {
                    card: key,
                    next: self.next_card,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kanban() -> (Board, BucketId, BucketId, BucketId) {
        let board = Board::from_config(BoardConfig::kanban()).unwrap();
        let ids: Vec<_> = board.buckets().iter().map(Bucket::id).collect();
        (board, ids[0], ids[1], ids[2])
    }

    #[test]
    fn test_from_config_layout() {
        let (board, todo, doing, done) = kanban();

        assert_eq!(board.buckets().len(), 3);
        assert_eq!(board.bucket_by_name("In Progress"), Some(doing));
        assert_eq!(board.left_of(todo), None);
        assert_eq!(board.right_of(todo), Some(doing));
        assert_eq!(board.left_of(done), Some(doing));
        assert_eq!(board.right_of(done), None);
    }

    #[test]
    fn test_new_card_is_unplaced() {
        let mut board = Board::new();
        let card = board.add_card("Write spec", "Draft section 4").unwrap();

        assert_eq!(board.parent_of(card), None);
        assert_eq!(board.unplaced_cards(), vec![card]);
        assert!(board.check_consistency().is_ok());
    }

    #[test]
    fn test_place_card_sets_parent_and_membership() {
        let (mut board, todo, _, _) = kanban();
        let card = board.add_card("A", "").unwrap();

        board.place_card(card, todo, CardPosition::Bottom).unwrap();

        assert_eq!(board.parent_of(card), Some(todo));
        assert_eq!(board.cards_in(todo), &[card]);
        assert!(board.unplaced_cards().is_empty());
    }

    #[test]
    fn test_place_card_twice_fails() {
        let (mut board, todo, doing, _) = kanban();
        let card = board.add_card_to(todo, "A", "").unwrap();

        let err = board.place_card(card, doing, CardPosition::Top).unwrap_err();

        assert_eq!(err, MoveError::AlreadyPlaced { card, bucket: todo });
        assert!(err.is_precondition());
        assert!(board.cards_in(doing).is_empty());
    }

    #[test]
    fn test_add_card_to_unknown_bucket_creates_nothing() {
        let mut board = Board::new();

        let err = board.add_card_to(BucketId(9), "A", "").unwrap_err();

        assert_eq!(err, MoveError::UnknownBucket(BucketId(9)));
        assert_eq!(board.card_count(), 0);
    }

    #[test]
    fn test_shift_right() {
        let (mut board, todo, doing, _) = kanban();
        let card = board.add_card_to(todo, "A", "").unwrap();

        let outcome = board.shift_right(todo, card).unwrap();

        assert_eq!(outcome, MoveOutcome { card, from: todo, to: doing });
        assert!(outcome.moved());
        assert_eq!(board.parent_of(card), Some(doing));
        assert_eq!(board.cards_in(doing), &[card]);
        assert!(board.cards_in(todo).is_empty());
    }

    #[test]
    fn test_shift_from_wrong_bucket() {
        let (mut board, todo, doing, _) = kanban();
        let card = board.add_card_to(todo, "A", "").unwrap();

        let err = board.shift_left(doing, card).unwrap_err();

        assert_eq!(err, MoveError::NotInBucket { card, bucket: doing });
        assert_eq!(board.parent_of(card), Some(todo));
    }

    #[test]
    fn test_move_unplaced_card() {
        let (mut board, _, _, _) = kanban();
        let card = board.add_card("A", "").unwrap();

        let err = board.move_right(card).unwrap_err();

        assert_eq!(err, MoveError::NoParent { card });
        assert!(err.is_precondition());
    }

    #[test]
    fn test_move_unknown_card() {
        let (mut board, _, _, _) = kanban();
        assert_eq!(
            board.move_left(CardId(42)).unwrap_err(),
            MoveError::UnknownCard(CardId(42))
        );
    }

    #[test]
    fn test_shift_inserts_at_configured_position() {
        let (mut board, todo, doing, _) = kanban();
        let existing = board.add_card_to(doing, "Existing", "").unwrap();
        let card = board.add_card_to(todo, "A", "").unwrap();

        board.set_shift_position(CardPosition::Top);
        board.move_right(card).unwrap();

        assert_eq!(board.cards_in(doing), &[card, existing]);
    }

    #[test]
    fn test_remove_card_detaches() {
        let (mut board, todo, _, _) = kanban();
        let a = board.add_card_to(todo, "A", "").unwrap();
        let b = board.add_card_to(todo, "B", "").unwrap();

        let removed = board.remove_card(a).unwrap();

        assert_eq!(removed.parent(), None);
        assert_eq!(removed.title(), "A");
        assert_eq!(board.cards_in(todo), &[b]);
        assert!(board.card(a).is_none());
        assert_eq!(board.remove_card(a).unwrap_err(), MoveError::UnknownCard(a));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut board = Board::new();
        let a = board.add_card("A", "").unwrap();
        board.remove_card(a).unwrap();
        let b = board.add_card("B", "").unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn test_consistency_detects_mismatch() {
        let (mut board, todo, doing, _) = kanban();
        let card = board.add_card_to(todo, "A", "").unwrap();

        // Reassign without moving membership
        board.cards.get_mut(&card).unwrap().reassign_parent(doing);

        assert_eq!(
            board.check_consistency(),
            Err(ConsistencyError::ParentMismatch {
                card,
                bucket: todo,
                parent: Some(doing),
            })
        );
    }

    #[test]
    fn test_consistency_detects_orphan_and_duplicate() {
        let (mut board, todo, doing, _) = kanban();
        let card = board.add_card("A", "").unwrap();
        board.cards.get_mut(&card).unwrap().reassign_parent(todo);

        assert_eq!(
            board.check_consistency(),
            Err(ConsistencyError::Orphaned { card, bucket: todo })
        );

        board.buckets[0].insert(card, CardPosition::Bottom);
        board.buckets[1].insert(card, CardPosition::Bottom);
        assert_eq!(board.bucket(doing).unwrap().len(), 1);
        assert_eq!(
            board.check_consistency(),
            Err(ConsistencyError::Duplicate { card })
        );
    }

    #[test]
    fn test_card_counter_exhausted() {
        let (mut board, todo, _, _) = kanban();
        board.next_card = u32::MAX - 1;

        let last = board.add_card("Last", "").unwrap();
        assert_eq!(last, CardId(u32::MAX - 1));

        assert_eq!(board.add_card("A", ""), Err(MoveError::CardIdsExhausted));
        assert_eq!(
            board.add_card_to(todo, "B", ""),
            Err(MoveError::CardIdsExhausted)
        );
        assert_eq!(board.card_count(), 1);
        assert!(board.cards_in(todo).is_empty());
        assert!(board.check_consistency().is_ok());
    }

    #[test]
    fn test_bucket_counter_exhausted() {
        let mut board = Board::new();
        board.next_bucket = u16::MAX - 1;

        let last = board.add_bucket("Last").unwrap();
        assert_eq!(last, BucketId(u16::MAX - 1));

        assert_eq!(board.add_bucket("Extra"), Err(MoveError::BucketIdsExhausted));
        assert_eq!(board.buckets().len(), 1);
        assert!(board.check_consistency().is_ok());
    }

    #[test]
    fn test_from_config_with_too_many_buckets() {
        let mut config = BoardConfig::new();
        config.buckets = vec![String::from("Column"); usize::from(u16::MAX) + 1];

        assert_eq!(
            Board::from_config(config).unwrap_err(),
            MoveError::BucketIdsExhausted
        );
    }
}
