use super::{GameHistorian, HistorianError};
use crate::game::{Game, GameEvent, GameId};

/// A historian that hands every event to a function.
/// This is useful for testing and debugging, or for
/// small one off integrations.
#[derive(Debug, Clone)]
pub struct FnHistorian<F> {
    func: F,
}

impl<F: FnMut(&GameId, &Game, &GameEvent) -> Result<(), HistorianError>> FnHistorian<F> {
    /// Create a new `FnHistorian` with the provided function
    /// that will be called when something happens in the game.
    pub fn new(f: F) -> Self {
        Self { func: f }
    }
}

impl<F: FnMut(&GameId, &Game, &GameEvent) -> Result<(), HistorianError>> GameHistorian
    for FnHistorian<F>
{
    fn record_event(
        &mut self,
        id: &GameId,
        game: &Game,
        event: &GameEvent,
    ) -> Result<(), HistorianError> {
        (self.func)(id, game, event)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::game::{GameBuilder, PlayerId};

    #[test]
    fn test_can_count_events() {
        let count = Rc::new(RefCell::new(0));
        let last_event: Rc<RefCell<Option<GameEvent>>> = Rc::new(RefCell::new(None));

        let borrow_count = count.clone();
        let borrow_last_event = last_event.clone();
        let historian = FnHistorian::new(move |_id, _game, event| {
            *borrow_count.borrow_mut() += 1;
            *borrow_last_event.borrow_mut() = Some(event.clone());
            Ok(())
        });

        let mut game = GameBuilder::default().name("fn").build().unwrap();
        for name in ["alice", "bob", "carol"] {
            game.sign_up(name).unwrap();
        }
        game.add_historian(Box::new(historian));

        let mut rng = StdRng::seed_from_u64(3);
        game.start(PlayerId(1), &mut rng).unwrap();
        assert_eq!(1, *count.borrow());

        game.eliminate(PlayerId(1), PlayerId(2), 1, &mut rng).unwrap();
        assert_eq!(2, *count.borrow());
        assert!(matches!(
            *last_event.borrow(),
            Some(GameEvent::Eliminated {
                eliminated: PlayerId(2),
                ..
            })
        ));
    }
}
