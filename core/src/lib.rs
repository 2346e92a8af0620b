//! Pure game core for Pop Battle.
//!
//! Everything that decides what happens in the game lives here: state,
//! figure generation, the battle engine, the mock exchange, and the
//! command dispatch the frontends drive. No DOM, no host bindings - the
//! browser client and the headless simulator are both thin shells over
//! this crate.

pub mod battle;
pub mod commands;
pub mod error;
pub mod exchange;
pub mod generator;
pub mod log;
pub mod rng;
pub mod shop;
pub mod state;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use battle::{Battle, BattleResult, RoundReport};
pub use commands::{dispatch, Command, CommandOutcome};
pub use error::{GameError, GameResult};
pub use exchange::{Currency, ExchangeReceipt};
pub use state::GameState;
pub use types::{BoxTier, Figure, FigureId, FigureKind, Rarity};
pub use view::{BattleView, FigureView, GameView};
