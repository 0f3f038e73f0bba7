//! Plain-text renderer.
//!
//! Draws cards as lines of text: a header with the move controls and the
//! title, the description wrapped to the style's wrap length, and the view
//! control. Useful for terminals, logs and tests.

use serde::{Deserialize, Serialize};

use super::renderer::Renderer;
use super::style::CardStyle;
use crate::board::CardAction;
use crate::cards::{Card, CardView};

/// Approximate pixel width of one character, used to turn pixel wrap
/// lengths into columns.
pub const DEFAULT_CHAR_WIDTH: u16 = 8;

/// A card drawn as text lines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextWidget {
    pub lines: Vec<String>,
}

impl std::fmt::Display for TextWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// An individual card view drawn as text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextWindow {
    /// Window title.
    pub title: String,
    /// Labels in the window body: the title, then the description.
    pub labels: Vec<String>,
}

/// Renders cards into `TextWidget`s and `TextWindow`s.
#[derive(Clone, Debug)]
pub struct TextRenderer {
    style: CardStyle,
    char_width: u16,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(CardStyle::default())
    }
}

impl TextRenderer {
    #[must_use]
    pub fn new(style: CardStyle) -> Self {
        Self {
            style,
            char_width: DEFAULT_CHAR_WIDTH,
        }
    }

    #[must_use]
    pub fn with_char_width(mut self, pixels: u16) -> Self {
        self.char_width = pixels.max(1);
        self
    }

    #[must_use]
    pub fn style(&self) -> &CardStyle {
        &self.style
    }

    /// Description width in columns, or `None` when wrapping is off.
    #[must_use]
    pub fn description_columns(&self) -> Option<usize> {
        self.style
            .description
            .wrap_length
            .map(|px| usize::from(px / self.char_width).max(1))
    }

    fn control(action: CardAction) -> String {
        format!("[{}]", action.label())
    }
}

impl Renderer for TextRenderer {
    type Widget = TextWidget;
    type Window = TextWindow;

    fn render(&mut self, card: &Card) -> TextWidget {
        let mut lines = vec![format!(
            "{} {} {}",
            Self::control(CardAction::MoveLeft),
            card.title(),
            Self::control(CardAction::MoveRight)
        )];
        lines.extend(wrap(card.description(), self.description_columns()));
        lines.push(Self::control(CardAction::View));
        TextWidget { lines }
    }

    fn render_popup(&mut self, view: &CardView) -> TextWindow {
        TextWindow {
            title: view.title.clone(),
            labels: vec![view.title.clone(), view.description.clone()],
        }
    }
}

/// Greedy word wrap. Words longer than a line are split.
///
/// Always returns at least one line.
pub fn wrap(text: &str, columns: Option<usize>) -> Vec<String> {
    let mut lines = Vec::new();

    match columns.filter(|&c| c > 0) {
        None => lines.extend(text.lines().map(str::to_owned)),
        Some(width) => {
            for paragraph in text.lines() {
                let mut line = String::new();
                let mut line_len = 0;

                for word in paragraph.split_whitespace() {
                    let mut rest = word;
                    while rest.chars().count() > width {
                        if !line.is_empty() {
                            lines.push(std::mem::take(&mut line));
                            line_len = 0;
                        }
                        let split = rest.char_indices().nth(width).map_or(rest.len(), |(i, _)| i);
                        lines.push(rest[..split].to_owned());
                        rest = &rest[split..];
                    }
                    if rest.is_empty() {
                        continue;
                    }

                    let word_len = rest.chars().count();
                    if line_len > 0 && line_len + 1 + word_len > width {
                        lines.push(std::mem::take(&mut line));
                        line_len = 0;
                    }
                    if line_len > 0 {
                        line.push(' ');
                        line_len += 1;
                    }
                    line.push_str(rest);
                    line_len += word_len;
                }

                lines.push(line);
            }
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
