//! Assassin is a library for running assassin style elimination games.
//!
//! Every player is handed a secret target. Eliminating your target hands
//! you their target, and the hunt continues until a single player is left.
//! The interesting part is handing out the first set of targets: everyone
//! has to be part of one big ring, so the assignment is a uniformly random
//! single cycle over the whole roster.
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use assassin::core::generate_cycle;
//!
//! let mut rng = StdRng::seed_from_u64(420);
//! let ring = generate_cycle(&["ada", "bob", "cy", "dee"], &mut rng).unwrap();
//!
//! assert_eq!(4, ring.len());
//! assert!(ring.validate().is_ok());
//! ```

/// Everything in core is agnostic to how a game is run.
/// It only knows about players as opaque identifiers.
pub mod core;
/// Game bookkeeping built on top of the target ring.
pub mod game;
