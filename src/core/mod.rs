//! Core types: handles, directions, configuration, errors.
//!
//! Everything here is independent of how cards and buckets are stored.
//! The board and renderer build on these types.

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;

pub use config::{BoardConfig, CardPosition, EdgePolicy};
pub use direction::Direction;
pub use error::{ConsistencyError, MoveError, SnapshotError};
pub use ids::{BucketId, CardId};
