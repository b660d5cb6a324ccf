//! Custom widgets for the game screen.

mod board;
mod swatches;

pub use board::BoardWidget;
pub use swatches::{SWATCH_HEIGHT, SwatchBar};
