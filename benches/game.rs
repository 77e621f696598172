#[macro_use]
extern crate criterion;
extern crate assassin;

use assassin::game::{Game, GameBuilder, PlayerId};
use criterion::Criterion;
use rand::{SeedableRng, rngs::StdRng};

const NAMES: [&str; 8] = [
    "alice", "bob", "carol", "dave", "erin", "frank", "grace", "heidi",
];

fn new_game(players: usize) -> Game {
    let mut game = GameBuilder::default()
        .name("bench")
        .build()
        .expect("Should be able to build a game.");
    for i in 0..players {
        let name = format!("{}{}", NAMES[i % NAMES.len()], "x".repeat(i / NAMES.len()));
        game.sign_up(&name).expect("Should be able to sign up.");
    }
    game
}

fn play_full_game(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(420);
    let owner = PlayerId(1);

    c.bench_function("play a 64 player game to the end", |b| {
        b.iter(|| {
            let mut game = new_game(64);
            game.start(owner, &mut rng).expect("Should start.");
            while let Some(victim) = game.target_of(owner).map(|p| p.id) {
                game.eliminate(owner, victim, 1, &mut rng)
                    .expect("Should eliminate.");
            }
            game
        });
    });
}

criterion_group!(benches, play_full_game);
criterion_main!(benches);
