//! Card styling, injected into renderers.
//!
//! Styles are plain configuration values. A renderer receives one when it
//! is constructed; nothing is registered globally.

use serde::{Deserialize, Serialize};

/// Border relief of a label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relief {
    Flat,
    #[default]
    Groove,
    Raised,
    Sunken,
}

/// Style for a single text label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    pub font_family: String,
    pub font_size: u16,
    /// Padding as left, top, right, bottom.
    pub padding: [u16; 4],
    pub foreground: String,
    pub background: String,
    pub relief: Relief,
    /// Line wrap width in pixels. `None` disables wrapping.
    pub wrap_length: Option<u16>,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_family: "Verdana".into(),
            font_size: 12,
            padding: [4; 4],
            foreground: "black".into(),
            background: "lightgray".into(),
            relief: Relief::Groove,
            wrap_length: None,
        }
    }
}

impl LabelStyle {
    #[must_use]
    pub fn with_font_size(mut self, size: u16) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub fn with_wrap_length(mut self, pixels: u16) -> Self {
        self.wrap_length = Some(pixels);
        self
    }

    /// Font in "Family size" form.
    #[must_use]
    pub fn font(&self) -> String {
        format!("{} {}", self.font_family, self.font_size)
    }
}

/// Complete style for a card and its popup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardStyle {
    /// Title label, also used for the move and view controls.
    pub title: LabelStyle,
    pub description: LabelStyle,
    /// Padding of the outer card frame as left, top, right, bottom.
    pub frame_padding: [u16; 4],
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            title: LabelStyle::default(),
            description: LabelStyle::default()
                .with_font_size(8)
                .with_wrap_length(240),
            frame_padding: [4, 10, 4, 10],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_card_style() {
        let style = CardStyle::default();

        assert_eq!(style.title.font(), "Verdana 12");
        assert_eq!(style.description.font(), "Verdana 8");
        assert_eq!(style.title.wrap_length, None);
        assert_eq!(style.description.wrap_length, Some(240));
        assert_eq!(style.description.relief, Relief::Groove);
        assert_eq!(style.frame_padding, [4, 10, 4, 10]);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "description": { "wrap_length": 80 } }"#;
        let style: CardStyle = serde_json::from_str(json).unwrap();

        assert_eq!(style.description.wrap_length, Some(80));
        assert_eq!(style.description.font_size, 12);
        assert_eq!(style.title.font(), "Verdana 12");
    }
}
