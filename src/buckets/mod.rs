//! Bucket system: the ordered columns of a board.
//!
//! Buckets are configured by the host, not hardcoded. The board lays them
//! out left to right in the order they were added.

pub mod bucket;

pub use bucket::Bucket;
