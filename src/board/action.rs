//! User actions on a single card.
//!
//! Every control a rendered card exposes maps to one `CardAction`. The host
//! UI forwards button presses to `Board::dispatch`, one at a time.

use serde::{Deserialize, Serialize};

use super::model::{Board, MoveOutcome};
use crate::cards::CardView;
use crate::core::error::MoveError;
use crate::core::ids::CardId;

/// An action the user can trigger on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardAction {
    MoveLeft,
    MoveRight,
    /// Open the card on its own.
    View,
}

impl CardAction {
    /// All actions, in the order their controls are laid out.
    pub const ALL: [CardAction; 3] = [CardAction::MoveLeft, CardAction::MoveRight, CardAction::View];

    /// Label of the control that triggers this action.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            CardAction::MoveLeft => "<",
            CardAction::MoveRight => ">",
            CardAction::View => "View Card Individually",
        }
    }
}

/// What a dispatched action produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Moved(MoveOutcome),
    Viewed(CardView),
}

impl Board {
    /// Apply a user action to a card.
    pub fn dispatch(&mut self, card: CardId, action: CardAction) -> Result<ActionOutcome, MoveError> {
        tracing::trace!(card = %card, ?action, "dispatch");
        match action {
            CardAction::MoveLeft => self.move_left(card).map(ActionOutcome::Moved),
            CardAction::MoveRight => self.move_right(card).map(ActionOutcome::Moved),
            CardAction::View => self.view(card).map(ActionOutcome::Viewed),
        }
    }
}
