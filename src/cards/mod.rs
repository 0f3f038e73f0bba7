//! Card system: card records and read-only views.
//!
//! ## Key Types
//!
//! - `Card`: title, description and the parent bucket handle
//! - `ShiftRequest`: a move request routed through a card to its bucket
//! - `CardView`: the popup contents (title and description only)

pub mod card;
pub mod view;

pub use card::{Card, ShiftRequest};
pub use view::CardView;
