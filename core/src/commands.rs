//! Input -> action mapping.
//!
//! Frontends translate raw UI events into [`Command`]s and hand them to
//! [`dispatch`]; rendering never touches game rules directly.

use serde::{Deserialize, Serialize};

use crate::battle::{self, RoundReport};
use crate::error::GameResult;
use crate::exchange::{self, Currency, ExchangeReceipt};
use crate::rng::GameRng;
use crate::shop;
use crate::state::GameState;
use crate::types::{BoxTier, Figure};

/// A player input, decoupled from whatever UI produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    BuyBox { tier: BoxTier },
    StartBattle,
    FightRound,
    Exchange { amount: u64, currency: Currency },
}

/// What a dispatched command produced, for the UI to render
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum CommandOutcome {
    #[serde(rename_all = "camelCase")]
    BoxOpened { figure: Figure },
    BattleStarted,
    #[serde(rename_all = "camelCase")]
    RoundFought { report: RoundReport },
    #[serde(rename_all = "camelCase")]
    Exchanged { receipt: ExchangeReceipt },
}

/// Apply a command to the state. Errors leave the state untouched.
pub fn dispatch(
    state: &mut GameState,
    command: Command,
    rng: &mut impl GameRng,
) -> GameResult<CommandOutcome> {
    match command {
        Command::BuyBox { tier } => {
            shop::buy_mystery_box(state, tier, rng).map(|figure| CommandOutcome::BoxOpened { figure })
        }
        Command::StartBattle => {
            battle::start_battle(state, rng).map(|()| CommandOutcome::BattleStarted)
        }
        Command::FightRound => {
            battle::fight_round(state, rng).map(|report| CommandOutcome::RoundFought { report })
        }
        Command::Exchange { amount, currency } => {
            exchange::exchange(state, amount, currency)
                .map(|receipt| CommandOutcome::Exchanged { receipt })
        }
    }
}
