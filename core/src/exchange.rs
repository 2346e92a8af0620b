//! Mock crypto exchange.
//!
//! A cosmetic multiplier over fixed static rates. The coin balance is
//! debited; no real asset moves anywhere.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::log;
use crate::state::GameState;

/// Currencies the exchange quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Currency {
    Btc,
    Eth,
}

impl Currency {
    /// Fixed coin -> crypto conversion rate
    pub fn rate(self) -> f64 {
        match self {
            Currency::Btc => 0.000_000_1,
            Currency::Eth => 0.000_001,
        }
    }

    pub fn ticker(self) -> &'static str {
        match self {
            Currency::Btc => "BTC",
            Currency::Eth => "ETH",
        }
    }

    /// Parse the currency key carried by the exchange selector
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "btc" => Some(Currency::Btc),
            "eth" => Some(Currency::Eth),
            _ => None,
        }
    }
}

/// Confirmation payload for a completed exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeReceipt {
    pub coins_spent: u64,
    pub currency: Currency,
    pub crypto_amount: f64,
    pub remaining_coins: u64,
}

/// Convert coins into a cosmetic crypto amount.
///
/// Rejects zero amounts and amounts above the balance; debits on success.
pub fn exchange(
    state: &mut GameState,
    amount: u64,
    currency: Currency,
) -> GameResult<ExchangeReceipt> {
    if amount == 0 {
        return Err(GameError::InvalidAmount);
    }
    state.spend_coins(amount)?;

    let crypto_amount = amount as f64 * currency.rate();
    log::action(
        "exchange",
        &format!("{} coins -> {} {}", amount, crypto_amount, currency.ticker()),
    );

    Ok(ExchangeReceipt {
        coins_spent: amount,
        currency,
        crypto_amount,
        remaining_coins: state.coins,
    })
}
