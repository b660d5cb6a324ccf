//! Persistence of the active game id between runs.

use std::path::{Path, PathBuf};

use derive_more::{Display, Error};
use hexfill::GameId;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// On-disk form of the session file.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    game_id: String,
}

/// An error reading or writing the session file.
///
/// Carries the construction site so log lines point at the failing call.
#[derive(Debug, Clone, Display, Error)]
#[display("session store error: {message} at {file}:{line}")]
pub struct StoreError {
    /// What went wrong.
    pub message: String,
    /// Source file of the construction site.
    pub file: &'static str,
    /// Line of the construction site.
    pub line: u32,
}

impl StoreError {
    /// Creates an error recording the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            message: message.into(),
            file: caller.file(),
            line: caller.line(),
        }
    }
}

/// Stores the id of the game the client is attached to.
///
/// The file is the terminal analog of a browser session: as long as it holds
/// an id, starting the client resumes that game.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store backed by `path`. Nothing is read until [`SessionStore::load`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored game id, if any.
    ///
    /// A missing file means no stored game. A file that does not parse is
    /// treated the same way after a warning, so a damaged file never locks
    /// the client out of starting fresh.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Option<GameId>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No session file");
                return Ok(None);
            }
            Err(e) => return Err(StoreError::new(format!("reading session file: {e}"))),
        };
        match toml::from_str::<StoredSession>(&raw) {
            Ok(stored) => {
                debug!(game_id = %stored.game_id, "Loaded stored game id");
                Ok(Some(GameId::new(stored.game_id)))
            }
            Err(e) => {
                warn!(error = %e, "Session file is damaged, ignoring it");
                Ok(None)
            }
        }
    }

    /// Persists `id` as the current game.
    #[instrument(skip(self, id), fields(path = %self.path.display(), game_id = %id))]
    pub fn save(&self, id: &GameId) -> Result<(), StoreError> {
        let stored = StoredSession {
            game_id: id.as_str().to_string(),
        };
        let body = toml::to_string(&stored)
            .map_err(|e| StoreError::new(format!("encoding session file: {e}")))?;
        std::fs::write(&self.path, body)
            .map_err(|e| StoreError::new(format!("writing session file: {e}")))?;
        debug!("Saved game id");
        Ok(())
    }

    /// Forgets the stored game, removing the file if present.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Cleared stored game id");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::new(format!("removing session file: {e}"))),
        }
    }
}
