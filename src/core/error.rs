use thiserror::Error;

/// This is the core error type for the assassin
/// library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssassinError {
    #[error("A target ring needs at least {required} players, got {count}")]
    NotEnoughPlayers { count: usize, required: usize },
    #[error("Players at positions {first} and {second} are the same player")]
    DuplicatePlayer { first: usize, second: usize },
    #[error("Player is not part of the target ring")]
    UnknownPlayer,
    #[error("Target ring is broken: {0}")]
    BrokenRing(String),
}
