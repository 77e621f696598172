use super::PlayerId;

/// Something that happened in a game, handed to historians.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Targets were handed out to everyone in `players`.
    Started { players: Vec<PlayerId> },
    /// `eliminated` is out and `assassin` has inherited their target.
    Eliminated {
        assassin: PlayerId,
        eliminated: PlayerId,
        new_target: Option<PlayerId>,
        credit: u32,
    },
    /// Only `winner` is left.
    Finished { winner: PlayerId },
}
