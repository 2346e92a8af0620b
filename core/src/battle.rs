//! Battle engine: opponent generation and round resolution.
//!
//! A battle pits a combat copy of the player's strongest figure against a
//! generated opponent. Rounds are fought one at a time on explicit input;
//! each round both damage values are computed before either is applied.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::generator::generate_figure;
use crate::log;
use crate::rng::GameRng;
use crate::state::GameState;
use crate::types::{Figure, Rarity};

/// Rarity pool opponents are generated from
pub const OPPONENT_POOL: &[Rarity] = &[Rarity::Rare, Rarity::Epic];

/// Coin reward range for a victory (inclusive)
pub const VICTORY_REWARD_MIN: u32 = 50;
pub const VICTORY_REWARD_MAX: u32 = 200;

/// Damage roll window, in percent of the attacker's power
const DAMAGE_ROLL_MIN: u32 = 85;
const DAMAGE_ROLL_MAX: u32 = 100;

/// Terminal outcome of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BattleResult {
    Victory,
    Defeat,
    Draw,
}

impl BattleResult {
    pub fn as_str(self) -> &'static str {
        match self {
            BattleResult::Victory => "VICTORY",
            BattleResult::Defeat => "DEFEAT",
            BattleResult::Draw => "DRAW",
        }
    }
}

/// An in-progress or resolved battle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battle {
    /// Combat copy of the strongest collection figure; the collection
    /// itself never takes damage.
    pub player: Figure,
    pub opponent: Figure,
    pub opponent_name: String,
    /// Completed rounds with both sides still standing
    pub round: u32,
    /// `None` while the battle is active
    pub result: Option<BattleResult>,
}

impl Battle {
    pub fn is_active(&self) -> bool {
        self.result.is_none()
    }
}

/// One resolved round, for UI playback
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundReport {
    pub round: u32,
    /// Damage the player's figure dealt
    pub player_damage: i32,
    /// Damage the opponent dealt
    pub opponent_damage: i32,
    pub player_health: i32,
    pub opponent_health: i32,
    pub result: Option<BattleResult>,
    /// Coins credited for a victory
    pub reward: Option<u64>,
}

/// Damage a figure deals in one round: an 85-100% roll off its power,
/// never below 1.
pub fn calculate_damage(figure: &Figure, rng: &mut impl GameRng) -> i32 {
    let roll = rng.gen_between(DAMAGE_ROLL_MIN, DAMAGE_ROLL_MAX) as i32;
    (figure.power * roll / 100).max(1)
}

/// Start a battle: select the player's strongest figure and generate an
/// opponent from the rare pool.
///
/// Errors while a battle is active; a resolved battle is replaced.
pub fn start_battle(state: &mut GameState, rng: &mut impl GameRng) -> GameResult<()> {
    if state.battle.as_ref().is_some_and(Battle::is_active) {
        return Err(GameError::BattleInProgress);
    }

    let player = state
        .strongest_figure()
        .cloned()
        .ok_or(GameError::EmptyCollection)?;
    let opponent = generate_figure(&mut state.next_figure_id, OPPONENT_POOL, rng);
    let opponent_name = format!("AI Opponent #{}", rng.gen_between(1000, 9999));

    log::info(&format!(
        "battle start: {} {:?} (power {}) vs {} {:?} (power {})",
        player.kind.name(),
        player.rarity,
        player.power,
        opponent_name,
        opponent.rarity,
        opponent.power,
    ));

    state.battle = Some(Battle {
        player,
        opponent,
        opponent_name,
        round: 0,
        result: None,
    });
    Ok(())
}

/// Fight one round of the current battle.
///
/// Both damage values are rolled before any damage lands, so neither
/// side's roll can observe this round's outcome. A simultaneous double-KO
/// resolves as a draw.
pub fn fight_round(state: &mut GameState, rng: &mut impl GameRng) -> GameResult<RoundReport> {
    let battle = state.battle.as_mut().ok_or(GameError::NoBattle)?;
    if battle.result.is_some() {
        return Err(GameError::BattleOver);
    }

    let player_damage = calculate_damage(&battle.player, rng);
    let opponent_damage = calculate_damage(&battle.opponent, rng);
    battle.opponent.take_damage(player_damage);
    battle.player.take_damage(opponent_damage);

    let result = match (battle.player.is_alive(), battle.opponent.is_alive()) {
        (true, true) => None,
        (true, false) => Some(BattleResult::Victory),
        (false, true) => Some(BattleResult::Defeat),
        (false, false) => Some(BattleResult::Draw),
    };

    match result {
        Some(outcome) => battle.result = Some(outcome),
        None => battle.round += 1,
    }

    let round = battle.round;
    let player_health = battle.player.health;
    let opponent_health = battle.opponent.health;

    let reward = if result == Some(BattleResult::Victory) {
        let amount = u64::from(rng.gen_between(VICTORY_REWARD_MIN, VICTORY_REWARD_MAX));
        state.credit_coins(amount);
        Some(amount)
    } else {
        None
    };

    log::action(
        "fight_round",
        &format!(
            "round={} player_damage={} opponent_damage={} result={:?}",
            round, player_damage, opponent_damage, result
        ),
    );

    Ok(RoundReport {
        round,
        player_damage,
        opponent_damage,
        player_health,
        opponent_health,
        result,
        reward,
    })
}
