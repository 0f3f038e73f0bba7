//! Horizontal move direction between buckets.

use serde::{Deserialize, Serialize};

/// Direction of a shift between neighbouring buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Index of the neighbour of `index` in a row of `len` buckets.
    ///
    /// Returns `None` past either edge.
    #[must_use]
    pub fn step(self, index: usize, len: usize) -> Option<usize> {
        match self {
            Direction::Left => index.checked_sub(1),
            Direction::Right => {
                let next = index + 1;
                (next < len).then_some(next)
            }
        }
    }

    /// Index reached by wrapping around the opposite edge.
    #[must_use]
    pub fn wrap(self, len: usize) -> usize {
        match self {
            Direction::Left => len.saturating_sub(1),
            Direction::Right => 0,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
