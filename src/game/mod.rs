//! Game bookkeeping for assassin.
//!
//! A [`Game`] owns the roster, hands out targets when the owner starts
//! it, and keeps the target ring up to date as eliminations come in.
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use assassin::game::{GameBuilder, VecHistorian};
//!
//! let mut game = GameBuilder::default().name("Dorm Hunt").build().unwrap();
//! let owner = game.sign_up("alice").unwrap();
//! game.sign_up("bob").unwrap();
//! game.sign_up("carol").unwrap();
//!
//! let events = VecHistorian::new_storage();
//! game.add_historian(Box::new(VecHistorian::new(events.clone())));
//!
//! let mut rng = StdRng::seed_from_u64(420);
//! game.start(owner, &mut rng).unwrap();
//!
//! // Alice takes out her target and inherits theirs.
//! let victim = game.target_of(owner).unwrap().id;
//! game.eliminate(owner, victim, 1, &mut rng).unwrap();
//!
//! assert_eq!(2, game.alive().count());
//! assert_eq!(2, events.borrow().len());
//! println!("{}", game.log()[0].describe(&game));
//! ```

mod builder;
mod errors;
mod event;
mod game_state;
/// Observers that are told about everything that happens in a game.
pub mod historian;
mod log;
mod messages;
mod player;

pub use builder::GameBuilder;
pub use errors::GameError;
pub use event::GameEvent;
pub use game_state::{Game, GameId};
pub use historian::{FnHistorian, GameHistorian, HistorianError, VecHistorian};
pub use log::LogEntry;
pub use messages::{LogMessage, default_messages};
pub use player::{Player, PlayerId, valid_username};
