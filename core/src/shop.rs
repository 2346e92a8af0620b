//! Mystery box store.

use crate::error::GameResult;
use crate::generator::generate_figure;
use crate::log;
use crate::rng::GameRng;
use crate::state::GameState;
use crate::types::{BoxTier, Figure};

/// Buy and open a mystery box.
///
/// Debits the tier's fixed price, generates one figure from the tier's
/// rarity pool and appends it to the collection. On insufficient funds
/// nothing is mutated.
pub fn buy_mystery_box(
    state: &mut GameState,
    tier: BoxTier,
    rng: &mut impl GameRng,
) -> GameResult<Figure> {
    state.spend_coins(tier.price())?;

    let figure = generate_figure(&mut state.next_figure_id, tier.rarity_pool(), rng);
    state.collection.push(figure.clone());

    log::action(
        "buy_mystery_box",
        &format!("tier={:?} figure_id={} rarity={:?}", tier, figure.id, figure.rarity),
    );
    Ok(figure)
}
