//! Liar's Dice.
//!
//! Each player holds a cup of dice; players take turns raising a bid on how
//! many dice of a face are on the table until someone challenges. This module
//! only builds the opening state; bidding and challenges are played by the
//! caller.

mod setup;
mod state;

pub use setup::{create_initial_dice_game_state, try_create_dice_game_state};
pub use state::{Bid, DiceGameState, PlayerDiceState, RoundResolution, DIE_FACES};
