use std::fmt;

/// Identifier for a player. Ids are handed out in sign up order
/// starting at 1 and are never reused within a game.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single participant in a game.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub username: String,
    /// Who this player is hunting. Only set once the game has started
    /// and cleared again when the player is eliminated.
    pub target: Option<PlayerId>,
    pub eliminated: bool,
    /// How many eliminations this player has been credited with.
    pub elimination_count: u32,
}

impl Player {
    pub(crate) fn new(id: PlayerId, username: String) -> Self {
        Self {
            id,
            username,
            target: None,
            eliminated: false,
            elimination_count: 0,
        }
    }

    /// Still in the hunt?
    pub fn is_alive(&self) -> bool {
        !self.eliminated
    }
}

/// Usernames are at least three ASCII letters and nothing else.
///
/// ```
/// use assassin::game::valid_username;
///
/// assert!(valid_username("Alice"));
/// assert!(!valid_username("al"));
/// assert!(!valid_username("alice_1"));
/// ```
pub fn valid_username(username: &str) -> bool {
    username.len() >= 3 && username.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        assert!(valid_username("bob"));
        assert!(valid_username("ZedZed"));
    }

    #[test]
    fn test_invalid_username() {
        assert!(!valid_username(""));
        assert!(!valid_username("ab"));
        assert!(!valid_username("bob smith"));
        assert!(!valid_username("bøb"));
        assert!(!valid_username("b0b"));
        // Punctuation between `Z` and `a` in ASCII isn't a letter.
        for name in ["bo_b", "bob^", "[bob]", "bo\\b", "`bob`"] {
            assert!(!valid_username(name), "{name} should be rejected");
        }
    }

    #[test]
    fn test_new_player_alive() {
        let p = Player::new(PlayerId(3), "cat".to_string());
        assert!(p.is_alive());
        assert_eq!(None, p.target);
        assert_eq!("#3", p.id.to_string());
    }
}
