use std::fmt;

use rand::Rng;
use tracing::{Level, event, trace_span};
use uuid::Uuid;

use crate::core::{Splice, TargetRing, generate_cycle};

use super::{
    GameError, GameEvent, GameHistorian, LogEntry, LogMessage, Player, PlayerId, valid_username,
};

/// Identifier for a game.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameId(pub Uuid);

impl GameId {
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse the hyphenated form produced by `Display`.
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// A single assassin game.
///
/// Players sign up, the owner (the first player to sign up) starts the
/// game which hands everyone a target, then the owner records
/// eliminations until one player is left.
///
/// Every method that changes the game either applies completely or
/// returns an error without touching anything. With the `serde` feature
/// the whole game can be stored as one record.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    id: GameId,
    name: String,
    owner: Option<PlayerId>,
    started: bool,
    announcement: Option<String>,
    min_players: usize,
    players: Vec<Player>,
    next_player_id: u64,
    messages: Vec<LogMessage>,
    log: Vec<LogEntry>,
    panic_on_historian_error: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    historians: Vec<Box<dyn GameHistorian>>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("owner", &self.owner)
            .field("started", &self.started)
            .field("announcement", &self.announcement)
            .field("players", &self.players)
            .field("log", &self.log)
            .finish_non_exhaustive()
    }
}

impl Game {
    pub(crate) fn new(
        id: GameId,
        name: String,
        min_players: usize,
        messages: Vec<LogMessage>,
        panic_on_historian_error: bool,
    ) -> Self {
        Self {
            id,
            name,
            owner: None,
            started: false,
            announcement: None,
            min_players,
            players: vec![],
            next_player_id: 1,
            messages,
            log: vec![],
            panic_on_historian_error,
            historians: vec![],
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn announcement(&self) -> Option<&str> {
        self.announcement.as_deref()
    }

    pub fn min_players(&self) -> usize {
        self.min_players
    }

    pub fn messages(&self) -> &[LogMessage] {
        &self.messages
    }

    /// Everyone who signed up, in sign up order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The elimination log, oldest first.
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Look a player up by username.
    ///
    /// Credentials are somebody else's problem, this only finds the player.
    pub fn login(&self, username: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.username == username)
    }

    /// Players that haven't been eliminated.
    pub fn alive(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_alive())
    }

    /// Who is this player currently hunting?
    pub fn target_of(&self, player: PlayerId) -> Option<&Player> {
        self.player(player)?.target.and_then(|t| self.player(t))
    }

    /// The last player standing, once the game has started and
    /// everybody else is out.
    pub fn winner(&self) -> Option<&Player> {
        if !self.started {
            return None;
        }
        let mut alive = self.alive();
        match (alive.next(), alive.next()) {
            (Some(winner), None) => Some(winner),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.winner().is_some()
    }

    /// The leaderboard. Players still alive come first, then by most
    /// eliminations, then alphabetically.
    pub fn standings(&self) -> Vec<&Player> {
        let mut players: Vec<&Player> = self.players.iter().collect();
        players.sort_by(|a, b| {
            a.eliminated
                .cmp(&b.eliminated)
                .then_with(|| b.elimination_count.cmp(&a.elimination_count))
                .then_with(|| a.username.cmp(&b.username))
        });
        players
    }

    /// The current target ring rebuilt from every player's target.
    pub fn ring(&self) -> Result<TargetRing<PlayerId>, GameError> {
        let pairs = self
            .players
            .iter()
            .filter_map(|p| p.target.map(|t| (p.id, t)));
        Ok(TargetRing::from_pairs(pairs)?)
    }

    /// Add a historian that will be told about everything that happens
    /// from now on.
    pub fn add_historian(&mut self, historian: Box<dyn GameHistorian>) {
        self.historians.push(historian);
    }

    pub fn historian_count(&self) -> usize {
        self.historians.len()
    }

    /// Sign a new player up. The first player to sign up owns the game.
    pub fn sign_up(&mut self, username: &str) -> Result<PlayerId, GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        if !valid_username(username) {
            return Err(GameError::InvalidUsername);
        }
        if self.login(username).is_some() {
            return Err(GameError::UsernameTaken(username.to_string()));
        }

        let id = PlayerId(self.next_player_id);
        self.next_player_id += 1;
        self.players.push(Player::new(id, username.to_string()));
        event!(Level::DEBUG, game = %self.id, player = %id, username, "Player signed up");

        if self.owner.is_none() {
            self.owner = Some(id);
            event!(Level::INFO, game = %self.id, player = %id, "Player owns the game");
        }
        Ok(id)
    }

    /// Hand ownership to `player`. Unless `overwrite` is set this only
    /// takes effect when the game has no owner.
    pub fn set_owner(&mut self, player: PlayerId, overwrite: bool) -> Result<(), GameError> {
        if self.player(player).is_none() {
            return Err(GameError::UnknownPlayer(player));
        }
        if overwrite || self.owner.is_none() {
            self.owner = Some(player);
        }
        Ok(())
    }

    pub fn set_announcement(
        &mut self,
        requester: PlayerId,
        announcement: Option<String>,
    ) -> Result<(), GameError> {
        self.require_owner(requester)?;
        self.announcement = announcement;
        Ok(())
    }

    /// Remove a player before the game starts.
    pub fn remove_player(
        &mut self,
        requester: PlayerId,
        player: PlayerId,
    ) -> Result<Player, GameError> {
        self.require_owner(requester)?;
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        let idx = self.index_of(player)?;
        let removed = self.players.remove(idx);
        if self.owner == Some(player) {
            self.owner = None;
        }
        event!(Level::DEBUG, game = %self.id, player = %player, "Player removed");
        Ok(removed)
    }

    /// Start the game, handing every player a target.
    ///
    /// The targets form a single ring over the whole roster, chosen
    /// uniformly at random from `rng`. Targets are written and the game
    /// is flagged as started together; on error nothing changes.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        requester: PlayerId,
        rng: &mut R,
    ) -> Result<(), GameError> {
        let span = trace_span!("Game::start", game = %self.id);
        let _enter = span.enter();

        self.require_owner(requester)?;
        if self.started {
            return Err(GameError::AlreadyStarted);
        }

        let roster: Vec<PlayerId> = self.alive().map(|p| p.id).collect();
        if roster.len() < self.min_players {
            return Err(GameError::NotEnoughPlayers {
                count: roster.len(),
                required: self.min_players,
            });
        }

        let ring = generate_cycle(&roster, rng)?;
        debug_assert!(ring.validate().is_ok());

        for player in self.players.iter_mut() {
            player.target = ring.target_of(&player.id).copied();
        }
        self.started = true;
        event!(Level::INFO, game = %self.id, players = roster.len(), "Game started");

        self.record(GameEvent::Started { players: roster });
        Ok(())
    }

    /// Record that `target` is out.
    ///
    /// Whoever was hunting them takes over their target. `credit` is
    /// added to that player's elimination count; zero credit means a
    /// forfeit and the log entry won't name anybody as the assassin.
    pub fn eliminate<R: Rng + ?Sized>(
        &mut self,
        requester: PlayerId,
        target: PlayerId,
        credit: u32,
        rng: &mut R,
    ) -> Result<Splice<PlayerId>, GameError> {
        let span = trace_span!("Game::eliminate", game = %self.id, target = %target);
        let _enter = span.enter();

        self.require_owner(requester)?;
        if !self.started {
            return Err(GameError::NotStarted);
        }
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        let victim_idx = self.index_of(target)?;
        if self.players[victim_idx].eliminated {
            return Err(GameError::AlreadyEliminated(target));
        }
        if self.messages.is_empty() {
            return Err(GameError::NeedMessages);
        }

        let mut ring = self.ring()?;
        let splice = ring.eliminate(&target)?;
        let assassin_idx = self.index_of(splice.assassin)?;
        let message = rng.random_range(0..self.messages.len());

        let victim = &mut self.players[victim_idx];
        victim.eliminated = true;
        victim.target = None;

        let assassin = &mut self.players[assassin_idx];
        assassin.target = splice.new_target;
        assassin.elimination_count += credit;

        self.log.push(LogEntry {
            assassin: (credit > 0).then_some(splice.assassin),
            target,
            message,
            at: chrono::Utc::now(),
        });
        event!(
            Level::INFO,
            game = %self.id,
            assassin = %splice.assassin,
            eliminated = %target,
            credit,
            "Player eliminated"
        );

        self.record(GameEvent::Eliminated {
            assassin: splice.assassin,
            eliminated: target,
            new_target: splice.new_target,
            credit,
        });
        if let Some(winner) = self.winner().map(|p| p.id) {
            event!(Level::INFO, game = %self.id, winner = %winner, "Game finished");
            self.record(GameEvent::Finished { winner });
        }
        Ok(splice)
    }

    fn require_owner(&self, requester: PlayerId) -> Result<(), GameError> {
        if self.owner == Some(requester) {
            Ok(())
        } else {
            Err(GameError::NotOwner)
        }
    }

    fn index_of(&self, player: PlayerId) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.id == player)
            .ok_or(GameError::UnknownPlayer(player))
    }

    fn record(&mut self, game_event: GameEvent) {
        let mut historians = std::mem::take(&mut self.historians);
        historians.retain_mut(|historian| {
            match historian.record_event(&self.id, self, &game_event) {
                Ok(()) => true,
                Err(error) => {
                    if self.panic_on_historian_error {
                        panic!("Historian failed to record {game_event:?}: {error}");
                    }
                    event!(Level::WARN, ?error, "Dropping historian after failed record");
                    false
                }
            }
        });
        self.historians = historians;
    }
}
