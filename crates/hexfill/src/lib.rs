//! Hexfill library - client-side model of the hex territory game
//!
//! This library holds everything the terminal client needs to talk to a
//! hexfill game service and reason about what it gets back.
//!
//! # Architecture
//!
//! - **Board**: flat-storage hex grid with staggered row addressing
//! - **Palette**: the closed six-color palette and its shading math
//! - **Session**: point-in-time game snapshots owned by the service
//! - **Api**: the three-operation REST client (create, fetch, move)
//!
//! # Example
//!
//! ```no_run
//! use hexfill::{Color, GameApi};
//!
//! # async fn example() -> Result<(), hexfill::ApiError> {
//! let api = GameApi::new("http://localhost:3000");
//! let id = api.create_game(5, 5).await?;
//! let session = api.fetch_game(&id).await?;
//! if session.is_usable_color(Color::Green) {
//!     api.submit_move(&id, Color::Green).await?;
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod api;
mod board;
mod palette;
mod session;

// Crate-level exports - Service client
pub use api::{ApiError, GameApi, GameId};

// Crate-level exports - Board model
pub use board::{BoardSnapshot, Cell, HexBoard, SnapshotError};

// Crate-level exports - Palette
pub use palette::{Color, Rgb, UnknownColor};

// Crate-level exports - Session state
pub use session::{InvalidPlayerId, Player, PlayerId, Players, Session};
