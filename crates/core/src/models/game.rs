//! Finished game records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Board size the game was played with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Game5,
    Game7,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Game5 => "game5",
            GameMode::Game7 => "game7",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "game5" => Ok(GameMode::Game5),
            "game7" => Ok(GameMode::Game7),
            other => Err(ValidationError::UnknownGameMode(other.to_string())),
        }
    }
}

/// A stored game row.
///
/// `gamemode` stays a plain string here because the table has no check
/// constraint and rows written by other tools are returned as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub username: String,
    pub attempts: i64,
    pub time: i64,
    pub gamemode: String,
}

/// Body of `POST /games` before validation.
///
/// Missing fields fall back to their zero value and are rejected by
/// [`GameSubmission::validate`]. A client-supplied `id` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameSubmission {
    pub username: String,
    pub attempts: i64,
    pub time: i64,
    pub gamemode: String,
}

impl GameSubmission {
    /// Check the submission in the order clients rely on: required fields
    /// first, then the game mode.
    pub fn validate(self) -> Result<NewGame, ValidationError> {
        if self.username.is_empty() {
            return Err(ValidationError::Empty { field: "username" });
        }
        if self.attempts <= 0 {
            return Err(ValidationError::NotPositive { field: "attempts" });
        }
        if self.time <= 0 {
            return Err(ValidationError::NotPositive { field: "time" });
        }
        if self.gamemode.is_empty() {
            return Err(ValidationError::Empty { field: "gamemode" });
        }
        let gamemode = self.gamemode.parse()?;

        Ok(NewGame {
            username: self.username,
            attempts: self.attempts,
            time: self.time,
            gamemode,
        })
    }
}

/// A validated game, ready to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGame {
    pub username: String,
    pub attempts: i64,
    pub time: i64,
    pub gamemode: GameMode,
}

impl NewGame {
    /// Attach the identifier assigned by storage
    pub fn with_id(self, id: i64) -> Game {
        Game {
            id,
            username: self.username,
            attempts: self.attempts,
            time: self.time,
            gamemode: self.gamemode.to_string(),
        }
    }
}
