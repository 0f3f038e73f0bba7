//! Board configuration.
//!
//! Hosts configure a board at startup by providing:
//! - The initial buckets, left to right
//! - `EdgePolicy`: what a shift does at the outermost buckets
//! - `CardPosition`: where shifted cards land in their new bucket
//!
//! All types are serde-friendly so a host can load them from any format.

use serde::{Deserialize, Serialize};

/// Behaviour of a shift that would leave the row of buckets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Fail with `MoveError::NoNeighbor`; the board is left untouched.
    #[default]
    Reject,
    /// Leave the card where it is and report a move onto itself.
    Clamp,
    /// Continue from the opposite end of the row.
    Wrap,
}

/// Position for inserting a card into a bucket.
///
/// Index 0 is the top of the column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardPosition {
    /// Insert above every other card.
    Top,
    /// Append below every other card.
    #[default]
    Bottom,
    /// Insert at a specific index, clamped to the bucket length.
    Index(usize),
}

impl CardPosition {
    /// Resolve to a concrete insertion index for a bucket of `len` cards.
    #[must_use]
    pub fn resolve(self, len: usize) -> usize {
        match self {
            CardPosition::Top => 0,
            CardPosition::Bottom => len,
            CardPosition::Index(i) => i.min(len),
        }
    }
}

/// Complete board configuration.
///
/// ## Example
///
/// ```
/// use rust_kanban::core::{BoardConfig, EdgePolicy};
///
/// let config = BoardConfig::new()
///     .with_bucket("Backlog")
///     .with_bucket("Doing")
///     .with_edge_policy(EdgePolicy::Clamp);
///
/// assert_eq!(config.buckets.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Bucket names, left to right.
    pub buckets: Vec<String>,

    /// Behaviour at the leftmost and rightmost buckets.
    pub edge_policy: EdgePolicy,

    /// Where a shifted card is inserted in its new bucket.
    pub shift_position: CardPosition,
}

impl BoardConfig {
    /// Create an empty configuration (no buckets).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The classic three-column board: Todo, In Progress, Done.
    #[must_use]
    pub fn kanban() -> Self {
        Self::new()
            .with_bucket("Todo")
            .with_bucket("In Progress")
            .with_bucket("Done")
    }

    /// Append a bucket to the right end.
    #[must_use]
    pub fn with_bucket(mut self, name: impl Into<String>) -> Self {
        self.buckets.push(name.into());
        self
    }

    #[must_use]
    pub fn with_edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.edge_policy = policy;
        self
    }

    #[must_use]
    pub fn with_shift_position(mut self, position: CardPosition) -> Self {
        self.shift_position = position;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kanban_preset() {
        let config = BoardConfig::kanban();
        assert_eq!(config.buckets, vec!["Todo", "In Progress", "Done"]);
        assert_eq!(config.edge_policy, EdgePolicy::Reject);
        assert_eq!(config.shift_position, CardPosition::Bottom);
    }

    #[test]
    fn test_position_resolve() {
        assert_eq!(CardPosition::Top.resolve(4), 0);
        assert_eq!(CardPosition::Bottom.resolve(4), 4);
        assert_eq!(CardPosition::Index(2).resolve(4), 2);
        assert_eq!(CardPosition::Index(10).resolve(4), 4);
    }

    #[test]
    fn test_from_json_with_defaults() {
        let json = r#"{ "buckets": ["A", "B"], "edge_policy": "wrap" }"#;
        let config: BoardConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.buckets, vec!["A", "B"]);
        assert_eq!(config.edge_policy, EdgePolicy::Wrap);
        assert_eq!(config.shift_position, CardPosition::Bottom);
    }

    #[test]
    fn test_index_position_json() {
        let json = r#"{ "shift_position": { "index": 1 } }"#;
        let config: BoardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.shift_position, CardPosition::Index(1));
        assert!(config.buckets.is_empty());
    }
}
