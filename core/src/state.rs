use serde::{Deserialize, Serialize};

use crate::battle::Battle;
use crate::error::{GameError, GameResult};
use crate::generator::generate_figure;
use crate::rng::GameRng;
use crate::types::{Figure, FigureId, Rarity};

/// Coin balance a fresh session starts with
pub const STARTING_COINS: u64 = 0;
/// Player level a fresh session starts with
pub const STARTING_LEVEL: u32 = 1;
/// Health every figure enters battle with
pub const BASE_HEALTH: i32 = 100;

/// The complete game state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Coin balance, never negative
    pub coins: u64,
    /// Player level (stored for the profile, never incremented)
    pub player_level: u32,
    /// Owned figures, append-only
    pub collection: Vec<Figure>,
    /// Current battle, if any
    pub battle: Option<Battle>,
    /// Counter for assigning unique figure ids
    pub next_figure_id: FigureId,
}

impl GameState {
    /// Fresh session state: two seeded figures, one from the common pool
    /// and one from the rare pool.
    pub fn new(rng: &mut impl GameRng) -> Self {
        let mut next_figure_id = 1;
        let collection = vec![
            generate_figure(&mut next_figure_id, &[Rarity::Common], rng),
            generate_figure(&mut next_figure_id, &[Rarity::Rare], rng),
        ];
        Self {
            coins: STARTING_COINS,
            player_level: STARTING_LEVEL,
            collection,
            battle: None,
            next_figure_id,
        }
    }

    /// State with no seeded figures
    pub fn empty() -> Self {
        Self {
            coins: STARTING_COINS,
            player_level: STARTING_LEVEL,
            collection: Vec::new(),
            battle: None,
            next_figure_id: 1,
        }
    }

    /// Check if the balance covers a cost
    pub fn can_afford(&self, cost: u64) -> bool {
        self.coins >= cost
    }

    /// Debit coins; the balance is left untouched on failure
    pub fn spend_coins(&mut self, amount: u64) -> GameResult<()> {
        if self.coins < amount {
            return Err(GameError::NotEnoughCoins {
                have: self.coins,
                need: amount,
            });
        }
        self.coins -= amount;
        Ok(())
    }

    /// Credit coins
    pub fn credit_coins(&mut self, amount: u64) {
        self.coins = self.coins.saturating_add(amount);
    }

    /// The player's strongest figure: left-to-right maximum scan,
    /// first encountered wins ties.
    pub fn strongest_figure(&self) -> Option<&Figure> {
        self.collection
            .iter()
            .reduce(|best, current| if current.power > best.power { current } else { best })
    }
}
