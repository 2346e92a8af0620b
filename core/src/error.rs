//! Error types for game operations
//!
//! Data-carrying enum errors; the `Display` text is what the client shows
//! in the host popup.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Game errors that can occur during gameplay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameError {
    /// Not enough coins to perform the action
    NotEnoughCoins { have: u64, need: u64 },
    /// Battle requires at least one figure in the collection
    EmptyCollection,
    /// A battle is already underway
    BattleInProgress,
    /// No battle has been started
    NoBattle,
    /// The current battle already resolved
    BattleOver,
    /// Exchange amount must be a positive whole number of coins
    InvalidAmount,
    /// Unknown mystery box tier key
    UnknownTier,
    /// Unknown exchange currency key
    UnknownCurrency,
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotEnoughCoins { have, need } => {
                write!(f, "Not enough PopCoins! You have {} and need {}.", have, need)
            }
            GameError::EmptyCollection => {
                write!(f, "You need at least one figure to battle!")
            }
            GameError::BattleInProgress => write!(f, "Finish the current battle first!"),
            GameError::NoBattle => write!(f, "There is no battle to fight."),
            GameError::BattleOver => write!(f, "This battle is already over."),
            GameError::InvalidAmount => {
                write!(f, "Enter a valid amount of PopCoins to exchange.")
            }
            GameError::UnknownTier => write!(f, "Unknown mystery box tier."),
            GameError::UnknownCurrency => write!(f, "Unknown currency."),
        }
    }
}

impl std::error::Error for GameError {}
