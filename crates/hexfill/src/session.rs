//! Game session state: players, turn order, winner and board.
//!
//! A [`Session`] is a point-in-time snapshot owned by the service. The client
//! never mutates one; every accepted move comes back as a whole replacement
//! snapshot, and the previous value is dropped wholesale.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::board::HexBoard;
use crate::palette::Color;

/// Identifier of one of the two players, `1` or `2` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PlayerId {
    /// The first player.
    One,
    /// The second player.
    Two,
}

impl PlayerId {
    /// The opposing player.
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// The wire number, `1` or `2`.
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> Self {
        id.number()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = InvalidPlayerId;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            _ => Err(InvalidPlayerId { value }),
        }
    }
}

/// A snapshot referenced a player other than `1` or `2`.
#[derive(Debug, Clone, Copy, Display, Error)]
#[display("player id must be 1 or 2, got {value}")]
pub struct InvalidPlayerId {
    /// The offending wire value.
    pub value: u8,
}

/// One player as the service describes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Which of the two seats this player occupies.
    pub id: PlayerId,
    /// The color this player currently holds.
    pub color: Color,
}

/// Exactly the two players, keyed `"1"` and `"2"` in the wire object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    /// The first player.
    #[serde(rename = "1")]
    pub one: Player,
    /// The second player.
    #[serde(rename = "2")]
    pub two: Player,
}

impl Players {
    /// The player sitting in seat `id`.
    pub const fn get(&self, id: PlayerId) -> Player {
        match id {
            PlayerId::One => self.one,
            PlayerId::Two => self.two,
        }
    }
}

/// A full game snapshot as fetched from the service.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The board, `"field"` on the wire.
    #[serde(rename = "field")]
    board: HexBoard,
    /// Both players.
    players: Players,
    /// Whose turn it is.
    current_player_id: PlayerId,
    /// Set once the game is decided; absent while play continues.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    winner_player_id: Option<PlayerId>,
}

impl Session {
    /// Assembles a session snapshot.
    pub fn new(
        board: HexBoard,
        players: Players,
        current_player_id: PlayerId,
        winner_player_id: Option<PlayerId>,
    ) -> Self {
        Self {
            board,
            players,
            current_player_id,
            winner_player_id,
        }
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.players.get(self.current_player_id)
    }

    /// The player waiting for their turn.
    pub fn other_player(&self) -> Player {
        self.players.get(self.current_player_id.other())
    }

    /// The winning player, once the game is decided.
    pub fn winner(&self) -> Option<Player> {
        self.winner_player_id.map(|id| self.players.get(id))
    }

    /// Whether the game has been decided.
    pub fn is_decided(&self) -> bool {
        self.winner_player_id.is_some()
    }

    /// Whether `candidate` may be submitted as the next move.
    ///
    /// A color held by either player is never usable, the mover's own color
    /// included, so this check must run before any move leaves the client.
    /// Once the game is decided nothing is usable.
    pub fn is_usable_color(&self, candidate: Color) -> bool {
        if self.is_decided() {
            return false;
        }
        candidate != self.players.one.color && candidate != self.players.two.color
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn session(one: Color, two: Color, winner: Option<PlayerId>) -> Session {
        Session::new(
            HexBoard::unclaimed(3, 3).unwrap(),
            Players {
                one: Player {
                    id: PlayerId::One,
                    color: one,
                },
                two: Player {
                    id: PlayerId::Two,
                    color: two,
                },
            },
            PlayerId::One,
            winner,
        )
    }

    #[test]
    fn test_player_id_wire_numbers() {
        assert_eq!(PlayerId::try_from(1).unwrap(), PlayerId::One);
        assert_eq!(PlayerId::try_from(2).unwrap(), PlayerId::Two);
        assert!(PlayerId::try_from(3).is_err());
        assert_eq!(PlayerId::One.other(), PlayerId::Two);
    }

    #[test]
    fn test_colors_held_by_either_player_are_unusable() {
        let session = session(Color::Red, Color::Blue, None);
        assert!(!session.is_usable_color(Color::Red));
        assert!(!session.is_usable_color(Color::Blue));
        assert!(session.is_usable_color(Color::Green));
        assert!(session.is_usable_color(Color::White));
    }

    #[test]
    fn test_nothing_is_usable_after_a_winner() {
        let session = session(Color::Red, Color::Blue, Some(PlayerId::Two));
        assert!(!session.is_usable_color(Color::Green));
        assert!(session.is_decided());
        assert_eq!(session.winner().unwrap().id, PlayerId::Two);
    }

    #[test]
    fn test_usability_truth_table_over_the_whole_palette() {
        for one in Color::iter() {
            for two in Color::iter() {
                let session = session(one, two, None);
                for candidate in Color::iter() {
                    let expected = candidate != one && candidate != two;
                    assert_eq!(
                        session.is_usable_color(candidate),
                        expected,
                        "candidate {candidate} with players {one} / {two}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_current_and_other_player() {
        let session = session(Color::Red, Color::Blue, None);
        assert_eq!(session.current_player().color, Color::Red);
        assert_eq!(session.other_player().color, Color::Blue);
    }

    #[test]
    fn test_parses_service_snapshot() {
        let json = serde_json::json!({
            "field": {
                "width": 2,
                "height": 2,
                "cells": [
                    {"color": "#ffffff"},
                    {"color": "#ffffff"},
                    {"color": "#ff0000"},
                ],
            },
            "players": {
                "1": {"id": 1, "color": "#ff0000"},
                "2": {"id": 2, "color": "#0000ff"},
            },
            "currentPlayerId": 2,
        });
        let session: Session = serde_json::from_value(json).unwrap();
        assert_eq!(*session.current_player_id(), PlayerId::Two);
        assert_eq!(session.winner(), None);
        assert_eq!(session.players().one.color, Color::Red);
        assert_eq!(session.board().width(), 2);
    }

    #[test]
    fn test_parses_decided_snapshot() {
        let json = serde_json::json!({
            "field": {"width": 1, "height": 1, "cells": [{"color": "#00ff00"}]},
            "players": {
                "1": {"id": 1, "color": "#00ff00"},
                "2": {"id": 2, "color": "#ffff00"},
            },
            "currentPlayerId": 1,
            "winnerPlayerId": 1,
        });
        let session: Session = serde_json::from_value(json).unwrap();
        assert_eq!(session.winner().unwrap().id, PlayerId::One);
        assert!(!session.is_usable_color(Color::Magenta));
    }

    #[test]
    fn test_snapshot_with_missing_players_is_an_error() {
        let json = serde_json::json!({
            "field": {"width": 1, "height": 1, "cells": [{"color": "#ffffff"}]},
            "players": {"1": {"id": 1, "color": "#ff0000"}},
            "currentPlayerId": 1,
        });
        assert!(serde_json::from_value::<Session>(json).is_err());
    }

    #[test]
    fn test_serializes_back_to_wire_names() {
        let session = session(Color::Red, Color::Blue, None);
        let value = serde_json::to_value(&session).unwrap();
        assert!(value.get("field").is_some());
        assert!(value.get("currentPlayerId").is_some());
        assert!(value.get("winnerPlayerId").is_none());
    }
}
