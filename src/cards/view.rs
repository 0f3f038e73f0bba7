//! Read-only view of a single card, used for the popup display.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// Title and description of one card, detached from the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub title: String,
    pub description: String,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            title: card.title().to_owned(),
            description: card.description().to_owned(),
        }
    }
}
