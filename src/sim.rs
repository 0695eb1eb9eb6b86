//! Turn runner.
//!
//! Drives one full rotation through the turn order: generate legal orders,
//! let each bot's strategy choose, validate the choices, record them, then
//! refresh statistics and append the turn to history. All mutation of the
//! game state happens here, serialized behind a single writer.

use std::collections::BTreeMap;

use crate::map::GameState;
use crate::movegen;
use crate::strategy::Bot;

/// Runs one full round: every bot in the rotation takes its turn, then
/// statistics are refreshed and the turn is recorded.
///
/// Orders a strategy returns that fail `is_legal_order` are dropped rather
/// than recorded; the port is trusted but verified. Bots missing from
/// `bots` or absent from `active_bots` record an empty slate.
pub fn run_round(state: &mut GameState, bots: &mut BTreeMap<String, Bot>) {
    let rotation = state.turn_order.clone();
    if rotation.is_empty() {
        return;
    }

    for bot_id in &rotation {
        let chosen = if state.active_bots.contains(bot_id) {
            let legal = movegen::legal_orders(state, bot_id);
            match bots.get_mut(bot_id) {
                Some(bot) => bot.take_turn(state, &legal),
                None => Vec::new(),
            }
        } else {
            Vec::new()
        };

        let accepted = chosen
            .into_iter()
            .filter(|order| movegen::is_legal_order(state, bot_id, order))
            .collect();
        state.bot_orders.insert(bot_id.clone(), accepted);
        state.next_turn();
    }

    for bot_id in &rotation {
        state.update_player_stats(bot_id);
    }
    state.record_turn();
}
