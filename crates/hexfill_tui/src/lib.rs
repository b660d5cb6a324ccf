//! Terminal client for the hexfill territory game
//!
//! Wraps the [`hexfill`] core library in a ratatui front end: a controller
//! event loop, one screen per client state, and custom widgets for the
//! staggered board and the palette swatches.
//!
//! # Architecture
//!
//! - **Controller**: render loop, input dispatch and network tasks
//! - **Screens**: board-size selection, pending/failed bootstrap, live game
//! - **Widgets**: board projection and palette swatch bar
//! - **Store**: the session file remembering the current game id

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod controller;
mod inspect;
mod screen;
mod screens;
mod store;
mod style;
mod widgets;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{
    CELL_HEIGHT_VAR, CELL_WIDTH_VAR, ClientConfig, ConfigError, SERVER_URL_VAR, Setting,
};

// Crate-level exports - Controller
pub use controller::{Controller, NetEvent};

// Crate-level exports - Inspection
pub use inspect::render_text;

// Crate-level exports - Screens
pub use screen::{Screen, ScreenTransition};
pub use screens::{GameScreen, NewGameScreen, PendingScreen, SIZE_PRESETS, SizePreset};

// Crate-level exports - Session store
pub use store::{SessionStore, StoreError};

// Crate-level exports - Styling and widgets
pub use style::{
    EDGE_DARK, EDGE_SOFT, HEADER_BG, contrast_fg, indicator_rgb, paint_raised, terminal_color,
};
pub use widgets::{BoardWidget, SWATCH_HEIGHT, SwatchBar};
