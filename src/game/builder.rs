use super::{Game, GameError, GameId, LogMessage, default_messages};

const DEFAULT_MIN_PLAYERS: usize = 2;

/// # GameBuilder
///
/// `GameBuilder` is used to configure and create a new [`Game`]. A name
/// is required, every other field is optional.
///
/// ## Setters
///
/// Each setter will set the optional value to the passed in value. Then
/// return the mutated builder.
///
/// ## Examples
///
/// ```
/// use assassin::game::GameBuilder;
///
/// let game = GameBuilder::default()
///     .name("Office Hunt")
///     .min_players(4)
///     .build()
///     .unwrap();
/// assert!(!game.is_started());
/// ```
#[derive(Default)]
pub struct GameBuilder {
    id: Option<GameId>,
    name: Option<String>,
    min_players: Option<usize>,
    messages: Option<Vec<LogMessage>>,
    panic_on_historian_error: bool,
}

impl GameBuilder {
    /// Use a known id rather than a fresh random one.
    pub fn id(mut self, id: GameId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the display name of the game.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// How many players must have signed up before the game can start.
    /// Defaults to 2, which is also the lowest allowed value.
    pub fn min_players(mut self, min_players: usize) -> Self {
        self.min_players = Some(min_players);
        self
    }

    /// Replace the built in elimination log messages.
    pub fn messages(mut self, messages: Vec<LogMessage>) -> Self {
        self.messages = Some(messages);
        self
    }

    /// Sets whether the game should panic if a historian errors
    /// rather than dropping the historian.
    pub fn panic_on_historian_error(mut self, panic_on_historian_error: bool) -> Self {
        self.panic_on_historian_error = panic_on_historian_error;
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or(GameError::NeedName)?;

        let min_players = self.min_players.unwrap_or(DEFAULT_MIN_PLAYERS);
        if min_players < DEFAULT_MIN_PLAYERS {
            return Err(GameError::MinPlayersTooLow(min_players));
        }

        let messages = self.messages.unwrap_or_else(default_messages);
        if messages.is_empty() {
            return Err(GameError::NeedMessages);
        }

        Ok(Game::new(
            self.id.unwrap_or_else(GameId::new_random),
            name,
            min_players,
            messages,
            self.panic_on_historian_error,
        ))
    }
}
