//! The board: owner of buckets and cards.
//!
//! ## Key Types
//!
//! - `Board`: bucket layout, card records, shifts and moves
//! - `MoveOutcome`: where a shifted card came from and went to
//! - `CardAction` / `ActionOutcome`: user actions dispatched to a card
//!
//! Snapshots (`Board::to_bytes` / `Board::from_bytes`) live in `snapshot`.

pub mod action;
pub mod model;
pub mod snapshot;

pub use action::{ActionOutcome, CardAction};
pub use model::{Board, MoveOutcome};
