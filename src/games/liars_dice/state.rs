//! Liar's Dice state types.
//!
//! Field names serialize in camelCase so the JSON matches what the room
//! clients read (`diceCount`, `currentBid`, `roundInfo`, ...).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{InvalidArgument, PlayerId, PlayerMap, Result};

/// Highest face on a die.
pub const DIE_FACES: u8 = 6;

/// Dice inventory for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDiceState {
    /// Dice the player still owns.
    pub dice_count: u8,

    /// Faces from the latest roll. Empty until the first roll.
    pub dice: SmallVec<[u8; 5]>,
}

impl PlayerDiceState {
    #[must_use]
    pub fn new(dice_count: u8) -> Self {
        Self {
            dice_count,
            dice: SmallVec::new(),
        }
    }
}

/// A claim that at least `quantity` dice across the table show `face`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    pub quantity: u32,
    pub face: u8,
}

impl Bid {
    /// Create a bid, rejecting zero quantities and faces off the die.
    pub fn new(quantity: u32, face: u8) -> Result<Self> {
        if quantity == 0 {
            return Err(InvalidArgument::BidQuantity);
        }
        if !(1..=DIE_FACES).contains(&face) {
            return Err(InvalidArgument::BidFace(face));
        }
        Ok(Self { quantity, face })
    }
}

/// Outcome of the last challenged bid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResolution {
    /// Whether everyone's dice should be shown.
    pub reveal: bool,
    pub bidder: Option<PlayerId>,
    pub challenger: Option<PlayerId>,
    /// Player who loses a die.
    pub loser: Option<PlayerId>,
    /// How many dice actually showed the bid face.
    pub actual_quantity: u32,
    pub message: String,
}

/// Full Liar's Dice game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceGameState {
    pub players: PlayerMap<PlayerDiceState>,
    pub turn_order: Vec<PlayerId>,
    pub current_player: PlayerId,
    pub current_bid: Option<Bid>,
    pub last_bidder: Option<PlayerId>,
    pub turn: u32,
    pub round: u32,
    pub game_winner: Option<PlayerId>,
    pub round_info: RoundResolution,
}

impl DiceGameState {
    /// Get a player's dice.
    #[must_use]
    pub fn player(&self, id: &str) -> Option<&PlayerDiceState> {
        self.players.get(id)
    }

    /// Dice left on the table across all players.
    #[must_use]
    pub fn total_dice(&self) -> u32 {
        self.players.iter().map(|(_, p)| u32::from(p.dice_count)).sum()
    }
}
