use thiserror::Error;

use crate::core::AssassinError;

use super::PlayerId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("The game has already started")]
    AlreadyStarted,
    #[error("The game hasn't started yet")]
    NotStarted,
    #[error("The game is over")]
    GameOver,
    #[error("Only the owner of the game can do that")]
    NotOwner,
    #[error("No player {0} in this game")]
    UnknownPlayer(PlayerId),
    #[error("Player {0} has already been eliminated")]
    AlreadyEliminated(PlayerId),
    #[error("Username must only contain A-z and be at least 3 characters in length")]
    InvalidUsername,
    #[error("Username {0} is already taken")]
    UsernameTaken(String),
    #[error("Need at least {required} players to start, have {count}")]
    NotEnoughPlayers { count: usize, required: usize },
    #[error("A game needs a name")]
    NeedName,
    #[error("A game can't start with fewer than 2 players, got {0}")]
    MinPlayersTooLow(usize),
    #[error("A game needs at least one log message")]
    NeedMessages,
    #[error("Target ring error: {0}")]
    Ring(#[from] AssassinError),
}
