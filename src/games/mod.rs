//! Game implementations.
//!
//! - `liars_dice`: N-player bluffing dice game
//! - `card_battle`: Two-player card game over a shared catalog

pub mod card_battle;
pub mod liars_dice;
