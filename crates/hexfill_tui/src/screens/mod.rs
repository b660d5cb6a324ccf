//! Screens of the client state machine.

mod game;
mod new_game;
mod pending;

pub use game::GameScreen;
pub use new_game::{NewGameScreen, SIZE_PRESETS, SizePreset};
pub use pending::PendingScreen;
