//! HTTP client for the remote game service.
//!
//! Three operations make up the whole wire contract: create a game, fetch a
//! snapshot, submit a move. The service owns all rules; this client only
//! validates snapshot structure (through the [`crate::HexBoard`] conversion)
//! and reports everything else as it happened.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info, instrument, warn};

use crate::palette::Color;
use crate::session::Session;

/// Opaque game identifier issued by the service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Wraps a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as sent on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An error talking to or understanding the game service.
///
/// Carries the construction site so log lines point at the failing call.
#[derive(Debug, Clone, Display, Error)]
#[display("game service error: {message} at {file}:{line}")]
pub struct ApiError {
    /// What went wrong.
    pub message: String,
    /// Source file of the construction site.
    pub file: &'static str,
    /// Line of the construction site.
    pub line: u32,
}

impl ApiError {
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

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::new(error.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(format!("malformed service response: {error}"))
    }
}

/// Wire shape of a successful game creation.
#[derive(Debug, Deserialize)]
struct CreatedGame {
    id: GameId,
}

/// Client for the game service REST API.
#[derive(Debug, Clone)]
pub struct GameApi {
    base_url: String,
    client: reqwest::Client,
}

impl GameApi {
    /// Creates a client against `base_url`, with or without a trailing slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Asks the service to create a game of the given dimensions.
    #[instrument(skip(self))]
    pub async fn create_game(&self, width: u16, height: u16) -> Result<GameId, ApiError> {
        let url = format!("{}/games", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&json!({ "width": width, "height": height }))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(format!("POST {url} returned {status}")));
        }
        let created: CreatedGame = serde_json::from_str(&response.text().await?)?;
        info!(game_id = %created.id, "created game");
        Ok(created.id)
    }

    /// Fetches the current snapshot of a game.
    #[instrument(skip(self, id), fields(game_id = %id))]
    pub async fn fetch_game(&self, id: &GameId) -> Result<Session, ApiError> {
        let url = format!("{}/games/{}", self.base_url, id);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(format!("GET {url} returned {status}")));
        }
        let session: Session = serde_json::from_str(&response.text().await?)?;
        debug!(
            current_player = %session.current_player_id(),
            decided = session.is_decided(),
            "fetched game"
        );
        Ok(session)
    }

    /// Submits a color choice for the current player's move.
    ///
    /// `Ok(Some(session))` is the replacement snapshot of an accepted move;
    /// `Ok(None)` means the service rejected the move and the caller's state
    /// must stay untouched. `Err` is reserved for transport and decoding
    /// failures.
    #[instrument(skip(self, id), fields(game_id = %id, color = %color))]
    pub async fn submit_move(
        &self,
        id: &GameId,
        color: Color,
    ) -> Result<Option<Session>, ApiError> {
        let url = format!("{}/games/{}", self.base_url, id);
        let response = self
            .client
            .put(&url)
            .json(&json!({ "color": color }))
            .send()
            .await?;
        let status = response.status();
        if status.is_client_error() {
            warn!(%status, "service rejected move");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ApiError::new(format!("PUT {url} returned {status}")));
        }
        let body = response.text().await?;
        if body.trim().is_empty() {
            warn!("service rejected move with an empty reply");
            return Ok(None);
        }
        let value: serde_json::Value = serde_json::from_str(&body)?;
        if value.is_null() {
            warn!("service rejected move with a null reply");
            return Ok(None);
        }
        let session: Session = serde_json::from_value(value)?;
        debug!(decided = session.is_decided(), "move accepted");
        Ok(Some(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = GameApi::new("http://localhost:3000/");
        assert_eq!(api.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_api_error_records_location() {
        let err = ApiError::new("boom");
        assert!(err.file.ends_with("api.rs"));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_game_id_round_trips_as_plain_string() {
        let id: GameId = serde_json::from_str("\"abc-123\"").unwrap();
        assert_eq!(id.as_str(), "abc-123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc-123\"");
    }
}
