//! # rust-kanban
//!
//! The data and move model of a Kanban board: cards, ordered buckets, and
//! moving a card one bucket left or right.
//!
//! ## Design Principles
//!
//! 1. **Handles, not pointers**: a card refers to its bucket through a
//!    `BucketId`. The board owns both sides.
//!
//! 2. **Membership is never split**: every operation that changes which
//!    bucket lists a card also updates the card's parent, in one step.
//!
//! 3. **Errors, not crashes**: moving an unplaced card or running off the
//!    edge of the board returns a `MoveError`.
//!
//! ## Modules
//!
//! - `core`: IDs, directions, configuration, errors
//! - `cards`: Card records and read-only views
//! - `buckets`: Ordered card sequences
//! - `board`: The board, moves, user actions, snapshots
//! - `render`: Renderer trait, styles and a text renderer

pub mod core;
pub mod cards;
pub mod buckets;
pub mod board;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, BucketId, CardId, CardPosition, ConsistencyError, Direction, EdgePolicy,
    MoveError, SnapshotError,
};

pub use crate::cards::{Card, CardView, ShiftRequest};

pub use crate::buckets::Bucket;

pub use crate::board::{ActionOutcome, Board, CardAction, MoveOutcome};

pub use crate::render::{CardStyle, LabelStyle, Relief, Renderer, TextRenderer, TextWidget, TextWindow};
