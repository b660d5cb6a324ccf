//! Screen trait and transition type for the client state machine.

use crossterm::event::KeyEvent;
use hexfill::Color;
use ratatui::Frame;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`Controller`](crate::Controller) state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen, no state change.
    Stay,
    /// Create a game of the chosen size and attach to it.
    CreateGame {
        /// Cells in the longest rows.
        width: u16,
        /// Number of rows.
        height: u16,
    },
    /// Submit a color as the current player's move.
    ///
    /// Screens only emit this for colors that passed the local usability
    /// check; the controller trusts it and goes straight to the network.
    SubmitMove {
        /// The chosen color.
        color: Color,
    },
    /// Forget the stored game and return to board-size selection.
    StartOver,
    /// Exit the client cleanly.
    Quit,
}

/// Trait implemented by each screen in the client state machine.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;
}
