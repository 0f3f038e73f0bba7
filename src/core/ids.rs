//! Handle types for board objects.
//!
//! Cards and buckets are never referenced by pointer. Everything that needs
//! to name one holds a small `Copy` handle allocated by the [`Board`].
//!
//! ## Usage
//!
//! ```
//! use rust_kanban::core::{BucketId, CardId};
//!
//! let card = CardId::new(7);
//! let todo = BucketId::new(0);
//!
//! assert_eq!(card.raw(), 7);
//! assert_eq!(format!("{}", todo), "Bucket(0)");
//! ```
//!
//! [`Board`]: crate::board::Board

use serde::{Deserialize, Serialize};

/// Unique identifier for a card on a board.
///
/// Allocated sequentially by the board. IDs are never reused, so a handle
/// to a removed card stays invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Bucket (column) identifier.
///
/// Stable for the lifetime of the board. Left/right order is a property
/// of the board, not of the ID: `BucketId(3)` may sit left of `BucketId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BucketId(pub u16);

impl BucketId {
    /// Create a bucket ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for BucketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bucket({})", self.0)
    }
}
