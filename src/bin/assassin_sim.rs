extern crate assassin;

use assassin::game::{GameBuilder, GameError, PlayerId};
use rand::{Rng, SeedableRng, rngs::StdRng};

const NAMES: [&str; 12] = [
    "alice", "bob", "carol", "dave", "erin", "frank", "grace", "heidi", "ivan", "judy", "mallory",
    "oscar",
];

/// Run a random game to the end and print the log.
///
/// Usage: `assassin_sim [players] [seed]`
fn main() -> Result<(), GameError> {
    let mut args = std::env::args().skip(1);
    let players: usize = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(6)
        .clamp(2, NAMES.len());
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);

    let mut game = GameBuilder::default().name("Simulated Hunt").build()?;
    for name in NAMES.iter().take(players) {
        game.sign_up(name)?;
    }
    let owner = PlayerId(1);
    game.start(owner, &mut rng)?;

    println!("Game {} ({}) seed {}", game.name(), game.id(), seed);
    for (player, target) in game.ring()?.iter() {
        let name = |id: &PlayerId| game.player(*id).map_or("???", |p| p.username.as_str());
        println!("\t{} hunts {}", name(player), name(target));
    }

    while !game.is_finished() {
        let alive: Vec<PlayerId> = game.alive().map(|p| p.id).collect();
        let victim = alive[rng.random_range(0..alive.len())];
        // One in five eliminations is a forfeit.
        let credit = u32::from(!rng.random_bool(0.2));
        game.eliminate(owner, victim, credit, &mut rng)?;
    }

    for entry in game.log() {
        println!("{}", entry.describe(&game));
    }
    for (place, player) in game.standings().iter().enumerate() {
        println!(
            "{}. {} ({} eliminations)",
            place + 1,
            player.username,
            player.elimination_count
        );
    }
    Ok(())
}
