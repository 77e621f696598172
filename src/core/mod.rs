//! This is the core module. It exports the target assignment
//! code that doesn't know anything about games.

/// Core error type.
mod error;
/// Export `AssassinError`
pub use self::error::AssassinError;

/// Random single cycle generation.
mod cycle;
/// Export the generators.
pub use self::cycle::{generate_chain, generate_cycle};

/// Who hunts whom.
mod ring;
/// Export the ring and the result of splicing a player out of it.
pub use self::ring::{RingWalk, Splice, TargetRing};
