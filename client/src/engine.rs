//! Game engine for browser WASM builds
//!
//! This module provides the main game engine exposed to JavaScript via
//! wasm-bindgen. The page translates DOM events (nav clicks, store
//! buttons, the battle button, the exchange form) into these calls;
//! every rejected action surfaces as a host popup.

use pop_battle_core::commands::{dispatch, Command};
use pop_battle_core::error::GameError;
use pop_battle_core::exchange::Currency;
use pop_battle_core::log;
use pop_battle_core::rng::XorShiftRng;
use pop_battle_core::state::GameState;
use pop_battle_core::types::BoxTier;
use pop_battle_core::view::GameView;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::host;

/// Sections the nav bar can show (`data-section` keys)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
enum Section {
    Store,
    Collection,
    Battle,
    Exchange,
}

impl Section {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "store" => Some(Section::Store),
            "collection" => Some(Section::Collection),
            "battle" => Some(Section::Battle),
            "exchange" => Some(Section::Exchange),
            _ => None,
        }
    }

    fn key(self) -> &'static str {
        match self {
            Section::Store => "store",
            Section::Collection => "collection",
            Section::Battle => "battle",
            Section::Exchange => "exchange",
        }
    }
}

/// Game view plus UI-local state, as one payload for the page
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientView {
    #[serde(flatten)]
    game: GameView,
    active_section: &'static str,
}

/// Parse the raw text of the exchange amount input field.
///
/// Only a positive whole number of coins is accepted; anything else is
/// rejected before it can reach a numeric comparison.
fn parse_amount(text: &str) -> Result<u64, GameError> {
    match text.trim().parse::<u64>() {
        Ok(amount) => Ok(amount),
        Err(_) => Err(GameError::InvalidAmount),
    }
}

fn entropy_seed() -> u64 {
    let mut buf = [0u8; 8];
    if getrandom::getrandom(&mut buf).is_err() {
        return 0x5eed_c0de;
    }
    u64::from_le_bytes(buf)
}

/// The main game engine exposed to WASM
#[wasm_bindgen]
pub struct GameEngine {
    state: GameState,
    rng: XorShiftRng,
    active_section: Section,
}

#[wasm_bindgen]
impl GameEngine {
    /// Create a new game engine with an optional seed.
    ///
    /// Without a seed the RNG is seeded from entropy; with one, the whole
    /// session is reproducible.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> Self {
        log::info("=== POP BATTLE ENGINE INITIALIZED ===");
        host::expand();

        let mut rng = XorShiftRng::seed_from_u64(seed.unwrap_or_else(entropy_seed));
        let state = GameState::new(&mut rng);
        Self {
            state,
            rng,
            active_section: Section::Store,
        }
    }

    /// Get the current game view as a JS object
    pub fn view(&self) -> JsValue {
        let view = ClientView {
            game: GameView::from_state(&self.state),
            active_section: self.active_section.key(),
        };
        match serde_wasm_bindgen::to_value(&view) {
            Ok(value) => value,
            Err(e) => {
                log::error(&format!("view serialization failed: {:?}", e));
                JsValue::NULL
            }
        }
    }

    /// Switch the visible section (`data-section` key of the clicked tab)
    pub fn navigate(&mut self, section: &str) -> Result<(), String> {
        log::action("navigate", section);
        match Section::from_key(section) {
            Some(target) => {
                self.active_section = target;
                Ok(())
            }
            None => Err(format!("unknown section: {}", section)),
        }
    }

    /// Buy a mystery box (`data-tier` key of the clicked box).
    /// Returns the revealed figure, or null after a popup on failure.
    pub fn buy_mystery_box(&mut self, tier: &str) -> JsValue {
        log::action("buy_mystery_box", tier);
        let tier = match BoxTier::from_key(tier) {
            Some(t) => t,
            None => return self.reject(GameError::UnknownTier),
        };
        self.run(Command::BuyBox { tier })
    }

    /// Start a battle with the strongest figure in the collection
    pub fn start_battle(&mut self) -> JsValue {
        log::action("start_battle", "");
        self.run(Command::StartBattle)
    }

    /// Fight one round of the current battle.
    /// Returns the round report the page animates from.
    pub fn fight_round(&mut self) -> JsValue {
        log::action("fight_round", "");
        self.run(Command::FightRound)
    }

    /// Exchange coins for a cosmetic crypto amount.
    /// Takes the raw input-field text and the selector value.
    pub fn exchange(&mut self, amount: &str, currency: &str) -> JsValue {
        log::action("exchange", &format!("amount={:?} currency={}", amount, currency));
        let amount = match parse_amount(amount) {
            Ok(a) => a,
            Err(e) => return self.reject(e),
        };
        let currency = match Currency::from_key(currency) {
            Some(c) => c,
            None => return self.reject(GameError::UnknownCurrency),
        };
        self.run(Command::Exchange { amount, currency })
    }
}

// Private implementation methods
impl GameEngine {
    fn run(&mut self, command: Command) -> JsValue {
        match dispatch(&mut self.state, command, &mut self.rng) {
            Ok(outcome) => serde_wasm_bindgen::to_value(&outcome).unwrap_or(JsValue::NULL),
            Err(err) => self.reject(err),
        }
    }

    /// Surface a rejected action: popup for the player, null for the caller
    fn reject(&self, err: GameError) -> JsValue {
        log::warn(&format!("action rejected: {:?}", err));
        host::notify(&err.to_string());
        JsValue::NULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_keys_round_trip() {
        for key in ["store", "collection", "battle", "exchange"] {
            let section = Section::from_key(key).expect("known key");
            assert_eq!(section.key(), key);
        }
        assert!(Section::from_key("shop").is_none());
    }

    #[test]
    fn test_parse_amount_accepts_whole_coins() {
        assert_eq!(parse_amount("100"), Ok(100));
        assert_eq!(parse_amount("  42 "), Ok(42));
        assert_eq!(parse_amount("0"), Ok(0), "zero parses; the exchange rejects it");
    }

    #[test]
    fn test_parse_amount_rejects_malformed_input() {
        for text in ["", "abc", "12.5", "-3", "1e3"] {
            assert_eq!(parse_amount(text), Err(GameError::InvalidAmount), "{:?}", text);
        }
    }
}
