//! View types for UI serialization
//!
//! Snapshots of game state for the frontends; rebuilt after every
//! mutating action.

use serde::{Deserialize, Serialize};

use crate::battle::Battle;
use crate::state::GameState;
use crate::types::{Figure, FigureId};

/// View of a single figure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigureView {
    pub id: FigureId,
    pub kind: String,
    pub rarity: String,
    pub level: u32,
    pub power: i32,
    pub health: i32,
}

impl From<&Figure> for FigureView {
    fn from(figure: &Figure) -> Self {
        Self {
            id: figure.id,
            kind: figure.kind.name().to_string(),
            rarity: figure.rarity.key().to_string(),
            level: figure.level,
            power: figure.power,
            health: figure.health,
        }
    }
}

/// View of the current battle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleView {
    pub player: FigureView,
    pub opponent: FigureView,
    pub opponent_name: String,
    pub round: u32,
    /// "VICTORY" / "DEFEAT" / "DRAW", absent while active
    pub result: Option<String>,
}

impl From<&Battle> for BattleView {
    fn from(battle: &Battle) -> Self {
        Self {
            player: FigureView::from(&battle.player),
            opponent: FigureView::from(&battle.opponent),
            opponent_name: battle.opponent_name.clone(),
            round: battle.round,
            result: battle.result.map(|r| r.as_str().to_string()),
        }
    }
}

/// The complete game view sent to the page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub coins: u64,
    pub player_level: u32,
    pub collection: Vec<FigureView>,
    pub battle: Option<BattleView>,
}

impl GameView {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            coins: state.coins,
            player_level: state.player_level,
            collection: state.collection.iter().map(FigureView::from).collect(),
            battle: state.battle.as_ref().map(BattleView::from),
        }
    }
}
