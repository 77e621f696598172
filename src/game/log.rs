use chrono::{DateTime, Utc};

use super::{Game, PlayerId};

/// One line in a game's elimination log.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Who gets the credit. `None` for a forfeit.
    pub assassin: Option<PlayerId>,
    pub target: PlayerId,
    /// Index into the game's log messages.
    pub message: usize,
    pub at: DateTime<Utc>,
}

impl LogEntry {
    /// Is this a forfeit rather than a credited elimination?
    pub fn is_forfeit(&self) -> bool {
        self.assassin.is_none()
    }

    /// Write the entry up using the usernames and messages from `game`.
    ///
    /// Players or messages that can't be found are rendered as `???`
    /// rather than failing, the log is for humans.
    pub fn describe(&self, game: &Game) -> String {
        let name = |id: PlayerId| {
            game.player(id)
                .map_or_else(|| "???".to_string(), |p| p.username.clone())
        };
        let message = game.messages().get(self.message);
        let target = name(self.target);

        match (self.assassin, message) {
            (Some(assassin), Some(m)) => format!("{} {} {}", name(assassin), m.elim, target),
            (None, Some(m)) => format!("{} {}", target, m.forfeit),
            (Some(assassin), None) => format!("{} ??? {}", name(assassin), target),
            (None, None) => format!("{target} ???"),
        }
    }
}
