//! Rendering boundary.
//!
//! The board never draws anything itself. Display layers implement
//! `Renderer`; the crate ships `TextRenderer` as a plain-text backend.
//!
//! ## Key Types
//!
//! - `Renderer`: trait the board calls to render cards and popups
//! - `CardStyle` / `LabelStyle`: injected styling configuration
//! - `TextRenderer`: renders to `TextWidget` / `TextWindow`

pub mod renderer;
pub mod style;
pub mod text;

pub use renderer::Renderer;
pub use style::{CardStyle, LabelStyle, Relief};
pub use text::{TextRenderer, TextWidget, TextWindow};
