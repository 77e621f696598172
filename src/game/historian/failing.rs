use super::{GameHistorian, HistorianError};
use crate::game::{Game, GameEvent, GameId};

/// A historian that will always fail to record an event.
///
/// This historian is useful for testing how a game treats
/// misbehaving historians.
pub struct FailingHistorian;

impl GameHistorian for FailingHistorian {
    fn record_event(
        &mut self,
        _id: &GameId,
        _game: &Game,
        _event: &GameEvent,
    ) -> Result<(), HistorianError> {
        Err(HistorianError::UnableToRecordEvent)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::game::{GameBuilder, PlayerId};

    fn two_player_game(panic_on_historian_error: bool) -> Game {
        let mut game = GameBuilder::default()
            .name("failing")
            .panic_on_historian_error(panic_on_historian_error)
            .build()
            .unwrap();
        game.sign_up("alice").unwrap();
        game.sign_up("bob").unwrap();
        game.add_historian(Box::new(FailingHistorian));
        game
    }

    #[test]
    #[should_panic]
    fn test_panic_fail_historian() {
        let mut game = two_player_game(true);
        let mut rng = StdRng::seed_from_u64(1);
        game.start(PlayerId(1), &mut rng).unwrap();
    }

    #[test_log::test]
    fn test_fail_historian_dropped() {
        let mut game = two_player_game(false);
        let mut rng = StdRng::seed_from_u64(1);
        game.start(PlayerId(1), &mut rng).unwrap();

        assert!(game.is_started());
        assert_eq!(0, game.historian_count());
    }
}
