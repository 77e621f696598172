use std::{cell::RefCell, rc::Rc};

use super::{GameHistorian, HistorianError};
use crate::game::{Game, GameEvent, GameId};

/// VecHistorian is a historian that will
/// append each event to a vector.
pub struct VecHistorian {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl VecHistorian {
    /// Create a new storage for the historian
    /// that can be introspected later.
    pub fn new_storage() -> Rc<RefCell<Vec<GameEvent>>> {
        Rc::new(RefCell::new(vec![]))
    }

    /// Create a new VecHistorian with the provided storage
    /// `Rc<RefCell<Vec<GameEvent>>>`
    pub fn new(events: Rc<RefCell<Vec<GameEvent>>>) -> Self {
        Self { events }
    }
}

impl GameHistorian for VecHistorian {
    fn record_event(
        &mut self,
        _id: &GameId,
        _game: &Game,
        event: &GameEvent,
    ) -> Result<(), HistorianError> {
        self.events.try_borrow_mut()?.push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::game::{GameBuilder, PlayerId};

    #[test_log::test]
    fn test_vec_historian_busy_storage_is_dropped() {
        let events = VecHistorian::new_storage();
        let mut game = GameBuilder::default().name("busy").build().unwrap();
        game.sign_up("alice").unwrap();
        game.sign_up("bob").unwrap();
        game.add_historian(Box::new(VecHistorian::new(events.clone())));

        // Holding a borrow makes recording fail with a borrow error.
        let held = events.borrow();
        let mut rng = StdRng::seed_from_u64(2);
        game.start(PlayerId(1), &mut rng).unwrap();

        assert!(held.is_empty());
        assert_eq!(0, game.historian_count());
    }

    #[test]
    fn test_vec_historian_reports_borrow_error() {
        let events = VecHistorian::new_storage();
        let mut historian = VecHistorian::new(events.clone());
        let game = GameBuilder::default().name("busy").build().unwrap();

        let _held = events.borrow();
        let result = historian.record_event(
            &game.id(),
            &game,
            &GameEvent::Finished {
                winner: PlayerId(1),
            },
        );
        assert!(matches!(result, Err(HistorianError::BorrowMutError(_))));
    }

    #[test_log::test]
    fn test_vec_historian_full_game() {
        let events = VecHistorian::new_storage();
        let mut game = GameBuilder::default().name("vec").build().unwrap();
        for name in ["alice", "bob", "carol", "dave"] {
            game.sign_up(name).unwrap();
        }
        game.add_historian(Box::new(VecHistorian::new(events.clone())));

        let mut rng = StdRng::seed_from_u64(11);
        let owner = PlayerId(1);
        game.start(owner, &mut rng).unwrap();

        // Keep eliminating whoever the owner is hunting until someone wins.
        while !game.is_finished() {
            let victim = game
                .alive()
                .find(|p| p.id != owner)
                .map(|p| p.id)
                .unwrap();
            game.eliminate(owner, victim, 1, &mut rng).unwrap();
        }

        let events = events.borrow();
        // start, three eliminations, finish
        assert_eq!(5, events.len());
        assert!(matches!(events[0], GameEvent::Started { .. }));
        assert_eq!(
            3,
            events
                .iter()
                .filter(|e| matches!(e, GameEvent::Eliminated { .. }))
                .count()
        );
        assert!(matches!(
            events[4],
            GameEvent::Finished {
                winner: PlayerId(1)
            }
        ));
    }
}
