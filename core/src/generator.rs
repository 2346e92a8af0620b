//! Random figure generation.

use crate::rng::GameRng;
use crate::state::BASE_HEALTH;
use crate::types::{Figure, FigureId, FigureKind, Rarity};

/// Generate a figure from a rarity pool.
///
/// Uniform kind from the fixed mold set, uniform rarity from the pool,
/// power from the rarity table. Pure over the injected RNG; the id comes
/// from the caller's counter.
pub fn generate_figure(
    figure_id_counter: &mut FigureId,
    pool: &[Rarity],
    rng: &mut impl GameRng,
) -> Figure {
    debug_assert!(!pool.is_empty(), "rarity pool must not be empty");

    let id = *figure_id_counter;
    *figure_id_counter += 1;

    let kind = FigureKind::ALL[rng.gen_range(FigureKind::ALL.len())];
    let rarity = pool[rng.gen_range(pool.len())];

    Figure {
        id,
        kind,
        rarity,
        level: 1,
        power: rarity.base_power(),
        health: BASE_HEALTH,
    }
}
