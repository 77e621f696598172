use thiserror::Error;

use super::{Game, GameEvent, GameId};

/// HistorianError is the error type for historian implementations.
#[derive(Error, Debug)]
pub enum HistorianError {
    #[error("Unable to record event")]
    UnableToRecordEvent,
    #[error("Borrow Mut Error: {0}")]
    BorrowMutError(#[from] std::cell::BorrowMutError),
}

/// Historians are a way for a game to notify the outside world
/// as it progresses. This is useful for logging, persisting,
/// or pushing announcements out to players.
pub trait GameHistorian {
    /// This method is called after the game has changed.
    ///
    /// # Arguments
    /// - `id` - The id of the game the event happened in.
    /// - `game` - The game after the event was applied.
    /// - `event` - What happened.
    ///
    /// # Returns
    /// - `Ok(())` if the event was recorded successfully
    /// - `Err(HistorianError)` if there was an error recording the event.
    ///
    /// Returning an error will cause the historian to be dropped from the
    /// `Game` unless the game was built to panic instead.
    fn record_event(
        &mut self,
        id: &GameId,
        game: &Game,
        event: &GameEvent,
    ) -> Result<(), HistorianError>;
}

mod failing;
mod fn_historian;
mod vec;

pub use failing::FailingHistorian;
pub use fn_historian::FnHistorian;
pub use vec::VecHistorian;
