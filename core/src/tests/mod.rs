mod exchange;

use crate::rng::{GameRng, XorShiftRng};
use crate::state::{GameState, BASE_HEALTH};
use crate::types::{Figure, FigureKind, Rarity};

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

/// RNG test double that replays a fixed script of raw u32 values
struct ScriptRng {
    values: Vec<u32>,
    next: usize,
}

impl ScriptRng {
    fn new(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl GameRng for ScriptRng {
    fn next_u32(&mut self) -> u32 {
        let value = self
            .values
            .get(self.next)
            .copied()
            .expect("ScriptRng script exhausted");
        self.next += 1;
        value
    }
}

fn seeded(seed: u64) -> XorShiftRng {
    XorShiftRng::seed_from_u64(seed)
}

fn make_figure(id: u32, rarity: Rarity) -> Figure {
    Figure {
        id,
        kind: FigureKind::Pop,
        rarity,
        level: 1,
        power: rarity.base_power(),
        health: BASE_HEALTH,
    }
}

/// Figure with arbitrary combat stats, for pinning battle outcomes
fn combat_figure(id: u32, power: i32, health: i32) -> Figure {
    Figure {
        id,
        kind: FigureKind::Pop,
        rarity: Rarity::Common,
        level: 1,
        power,
        health,
    }
}

fn state_with_coins(coins: u64) -> GameState {
    let mut state = GameState::empty();
    state.coins = coins;
    state
}
