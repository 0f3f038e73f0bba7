//! Renderer trait: the boundary between the board and a display layer.
//!
//! Display layers implement `Renderer` to turn cards into whatever their
//! toolkit draws. The board calls into the renderer; the renderer never
//! mutates the board.
//!
//! ## Implementation Notes
//!
//! - `render`: one widget per card, with controls for every `CardAction`
//! - `render_popup`: an individual view holding only the card's text

use crate::board::Board;
use crate::cards::{Card, CardView};
use crate::core::error::MoveError;
use crate::core::ids::{BucketId, CardId};

/// Display-layer collaborator.
pub trait Renderer {
    /// Displayable form of a card inside its bucket.
    type Widget;

    /// Displayable form of a card opened on its own.
    type Window;

    /// Render a card for display in its bucket.
    fn render(&mut self, card: &Card) -> Self::Widget;

    /// Render the individual view of a card.
    fn render_popup(&mut self, view: &CardView) -> Self::Window;
}

impl Board {
    /// Render one card.
    pub fn render_card<R: Renderer>(&self, card: CardId, renderer: &mut R) -> Result<R::Widget, MoveError> {
        let record = self.card(card).ok_or(MoveError::UnknownCard(card))?;
        tracing::trace!(card = %card, "render card");
        Ok(renderer.render(record))
    }

    /// Render every card of a bucket, top first.
    pub fn render_bucket<R: Renderer>(
        &self,
        bucket: BucketId,
        renderer: &mut R,
    ) -> Result<Vec<R::Widget>, MoveError> {
        let bucket = self.bucket(bucket).ok_or(MoveError::UnknownBucket(bucket))?;
        let mut widgets = Vec::with_capacity(bucket.len());
        for &card in bucket.cards() {
            widgets.push(self.render_card(card, renderer)?);
        }
        Ok(widgets)
    }

    /// Render the individual view of a card.
    pub fn render_popup<R: Renderer>(&self, card: CardId, renderer: &mut R) -> Result<R::Window, MoveError> {
        let view = self.view(card)?;
        tracing::trace!(card = %card, "render popup");
        Ok(renderer.render_popup(&view))
    }
}
