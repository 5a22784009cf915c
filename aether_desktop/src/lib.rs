//! Aether Desktop - the Aether Deck dashboard GUI built with Iced.

pub mod canvas;
pub mod constants;
pub mod styles;
pub mod theme;

pub use canvas::FieldBackdrop;
pub use constants::*;
pub use styles::*;
pub use theme::{app_theme, palette, PaletteColors};
