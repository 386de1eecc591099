//! Shared vocabulary: players, randomness, configuration, errors.
//!
//! Both games build on these types; neither game module depends on the other.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, Shuffle};
pub use config::{CardGameConfig, DiceGameConfig, DEFAULT_HAND_SIZE, DEFAULT_STARTING_DICE};
pub use error::{InvalidArgument, Result};
