//! Presentation mapping from the card records to a deterministic visual
//! surface, plus its SVG serialization.

pub mod palette;
pub mod surface;
mod svg;
pub mod wrap;

pub use palette::{Background, Elevation, Palette, Rgba};
pub use surface::{compose, Block, BorderSpec, CardSurface, CARD_WIDTH, MIN_AUTO_HEIGHT, PADDING};

#[cfg(test)]
mod tests;
