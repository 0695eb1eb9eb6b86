//! Bot strategies: how a bot chooses among its legal orders.
//!
//! The `Strategy` trait is the narrow port through which decision logic
//! consumes legal orders. Selection is pure with respect to the game
//! state; strategies receive it read-only and may not mutate it.

use std::collections::BTreeMap;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::map::{GameState, Order, OrderType};

/// Chooses which orders to place from the per-location legal candidates.
///
/// Called once per bot per turn with the candidate mapping for that bot
/// only. Implementations may return any subset; the turn runner validates
/// the result, so the one-order-per-location intent is a caller concern.
pub trait Strategy {
    fn choose_orders(
        &mut self,
        state: &GameState,
        legal: &BTreeMap<String, Vec<Order>>,
    ) -> Vec<Order>;
}

/// Picks one random candidate per location.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: SmallRng,
}

impl RandomStrategy {
    /// Creates a strategy seeded from entropy.
    pub fn new() -> Self {
        RandomStrategy {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a deterministic strategy from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        RandomStrategy {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        RandomStrategy::new()
    }
}

impl Strategy for RandomStrategy {
    fn choose_orders(
        &mut self,
        _state: &GameState,
        legal: &BTreeMap<String, Vec<Order>>,
    ) -> Vec<Order> {
        let mut chosen = Vec::new();
        for candidates in legal.values() {
            if candidates.is_empty() {
                continue;
            }
            let idx = self.rng.gen_range(0..candidates.len());
            chosen.push(candidates[idx].clone());
        }
        chosen
    }
}

/// Greedy expansion: per location, prefers the first MARCH, then the
/// first SUPPORT, and falls back to DEFEND.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyStrategy;

impl Strategy for GreedyStrategy {
    fn choose_orders(
        &mut self,
        _state: &GameState,
        legal: &BTreeMap<String, Vec<Order>>,
    ) -> Vec<Order> {
        let mut chosen = Vec::new();
        for candidates in legal.values() {
            let pick = candidates
                .iter()
                .find(|o| o.order_type == OrderType::March)
                .or_else(|| {
                    candidates
                        .iter()
                        .find(|o| o.order_type == OrderType::Support)
                })
                .or_else(|| candidates.first());
            if let Some(order) = pick {
                chosen.push(order.clone());
            }
        }
        chosen
    }
}

/// A bot: an id paired with its current strategy.
pub struct Bot {
    pub id: String,
    strategy: Box<dyn Strategy>,
}

impl Bot {
    pub fn new(id: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Bot {
            id: id.into(),
            strategy,
        }
    }

    /// Delegates order selection to the bot's strategy.
    pub fn take_turn(
        &mut self,
        state: &GameState,
        legal: &BTreeMap<String, Vec<Order>>,
    ) -> Vec<Order> {
        self.strategy.choose_orders(state, legal)
    }

    /// Swaps in a different strategy.
    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        self.strategy = strategy;
    }
}

impl std::fmt::Debug for Bot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bot").field("id", &self.id).finish()
    }
}
