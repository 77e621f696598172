use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;
use tracing::{Level, event, trace_span};

use super::{AssassinError, TargetRing};

/// Generate a random single cycle permutation of `0..n`.
///
/// The returned vector is indexed by position, `chain[i]` being the position
/// targeted by position `i`. Following the chain from any position visits
/// every position before coming back to where it started. Each of the
/// `(n - 1)!` cycles is equally likely.
///
/// Position 0 anchors the cycle. At every step a random position that has
/// not been placed yet (never the anchor) is appended to the path, and once
/// every other position is on the path it closes back to the anchor. This
/// is Sattolo's shuffle expressed as a walk rather than an in place swap.
///
/// `n == 0` gives an empty chain and `n == 1` gives `[0]`, a self loop. Use
/// [`generate_cycle`] when the result needs to be a valid ring.
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use assassin::core::generate_chain;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let chain = generate_chain(6, &mut rng);
///
/// let mut pos = chain[0];
/// let mut steps = 1;
/// while pos != 0 {
///     pos = chain[pos];
///     steps += 1;
/// }
/// assert_eq!(6, steps);
/// ```
pub fn generate_chain<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    if n == 0 {
        return vec![];
    }

    // Positions that haven't been placed on the path. The live entries are
    // always the prefix `pool[..n - i]` and `pool[0]` is never moved.
    let mut pool: Vec<usize> = (0..n).collect();
    let mut chain: Vec<usize> = (0..n).collect();
    let mut ptr = 0;

    for i in 0..n - 1 {
        let last = n - i - 1;
        let r = rng.random_range(1..=last);
        let target = pool[r];
        pool.swap(r, last);

        chain[ptr] = target;
        ptr = target;
    }

    // Close the loop back to the anchor.
    chain[ptr] = pool[0];
    chain
}

/// Assign every player a target so that the assignments form one ring
/// containing everybody.
///
/// Players are opaque. They only need to be distinct, and the order they
/// are passed in only matters for reproducing a result from a seeded rng.
///
/// # Errors
///
/// - `AssassinError::DuplicatePlayer` if the same player shows up twice.
/// - `AssassinError::NotEnoughPlayers` for a single player. There is no one
///   for them to hunt, so a one player game can't start.
///
/// No players at all is not an error, the ring is just empty.
pub fn generate_cycle<P, R>(players: &[P], rng: &mut R) -> Result<TargetRing<P>, AssassinError>
where
    P: Clone + Eq + Hash,
    R: Rng + ?Sized,
{
    let span = trace_span!("generate_cycle", players = players.len());
    let _enter = span.enter();

    let mut seen: HashMap<&P, usize> = HashMap::with_capacity(players.len());
    for (idx, player) in players.iter().enumerate() {
        if let Some(first) = seen.insert(player, idx) {
            event!(Level::DEBUG, first, second = idx, "Duplicate player in roster");
            return Err(AssassinError::DuplicatePlayer { first, second: idx });
        }
    }

    match players.len() {
        0 => return Ok(TargetRing::default()),
        1 => {
            return Err(AssassinError::NotEnoughPlayers {
                count: 1,
                required: 2,
            });
        }
        _ => {}
    }

    let chain = generate_chain(players.len(), rng);
    event!(Level::DEBUG, players = players.len(), "Generated target chain");

    Ok(TargetRing::from_chain(players.to_vec(), chain))
}
