//! Game state aggregate: the location registry, per-bot order slate,
//! player statistics, turn rotation, and append-only turn history.
//!
//! All id-keyed containers are ordered (`BTreeMap`/`BTreeSet`) so every
//! enumeration the engine performs is lexicographic and reproducible.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::location::Location;
use super::order::Order;

/// Per-bot statistics.
///
/// `territories` and `total_units` are derived from the map by
/// [`GameState::update_player_stats`]; `power`, `units_killed`, and
/// `orders_executed` are externally driven counters (combat outcomes)
/// that this engine only stores and scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub territories: u32,
    pub power: u32,
    pub total_units: u32,
    pub units_killed: u32,
    pub orders_executed: u32,
}

impl PlayerStats {
    /// Score: ten points per territory plus accumulated power.
    pub fn score(&self) -> u32 {
        self.territories * 10 + self.power
    }
}

/// One bot's line in a historical turn snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub territories: u32,
    pub power: u32,
    pub total_units: u32,
    pub score: u32,
}

/// An immutable snapshot of one recorded turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: u32,
    pub players: BTreeMap<String, PlayerSnapshot>,
}

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub bot_id: String,
    pub score: u32,
    pub territories: u32,
    pub total_units: u32,
}

/// The single shared mutable root for a simulation run.
///
/// Constructed empty, populated via location/adjacency registration, then
/// mutated turn-by-turn. The engine assumes exclusive, non-concurrent
/// access; read-only fan-out (legal-order generation) is safe, mutation
/// is single-writer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub locations: BTreeMap<String, Location>,
    /// Orders chosen this turn, replaced per turn per bot.
    pub bot_orders: BTreeMap<String, Vec<Order>>,
    pub player_stats: BTreeMap<String, PlayerStats>,
    /// Increments once per full rotation through `turn_order`.
    pub turn: u32,
    pub turn_order: Vec<String>,
    pub current_turn_index: usize,
    pub active_bots: BTreeSet<String>,
    /// Append-only; never rewritten.
    pub turn_history: Vec<TurnRecord>,
}

impl GameState {
    /// Creates an empty game state.
    pub fn new() -> Self {
        GameState::default()
    }

    /// Registers a location, keyed by its name.
    pub fn add_location(&mut self, location: Location) {
        self.locations.insert(location.name.clone(), location);
    }

    /// Creates a symmetric adjacency between two locations.
    ///
    /// Idempotent. Silently ignored if either name is unknown, keeping
    /// map assembly forgiving.
    pub fn connect_locations(&mut self, a: &str, b: &str) {
        if !self.locations.contains_key(a) || !self.locations.contains_key(b) {
            return;
        }
        if let Some(loc) = self.locations.get_mut(a) {
            loc.adjacent.insert(b.to_string());
        }
        if let Some(loc) = self.locations.get_mut(b) {
            loc.adjacent.insert(a.to_string());
        }
    }

    /// Returns the locations adjacent to the named location, in
    /// lexicographic order. Unknown neighbor names are skipped.
    pub fn adjacent_locations(&self, name: &str) -> Vec<&Location> {
        match self.locations.get(name) {
            Some(loc) => loc
                .adjacent
                .iter()
                .filter_map(|n| self.locations.get(n))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Returns all locations owned by the given bot.
    pub fn bot_locations(&self, bot_id: &str) -> Vec<&Location> {
        self.locations
            .values()
            .filter(|loc| loc.owner.as_deref() == Some(bot_id))
            .collect()
    }

    /// Returns the total unit count across the bot's locations.
    pub fn bot_unit_count(&self, bot_id: &str) -> u32 {
        self.bot_locations(bot_id)
            .iter()
            .map(|loc| loc.total_units())
            .sum()
    }

    /// Ensures a stats entry exists for the bot.
    pub fn init_player_stats(&mut self, bot_id: &str) {
        self.player_stats.entry(bot_id.to_string()).or_default();
    }

    /// Recomputes the bot's derived statistics (territories, total units)
    /// from current map state. Externally driven counters are untouched.
    pub fn update_player_stats(&mut self, bot_id: &str) {
        let territories = self.bot_locations(bot_id).len() as u32;
        let total_units = self.bot_unit_count(bot_id);
        let stats = self.player_stats.entry(bot_id.to_string()).or_default();
        stats.territories = territories;
        stats.total_units = total_units;
    }

    /// Appends a snapshot of the current turn to the history.
    pub fn record_turn(&mut self) {
        let players = self
            .player_stats
            .iter()
            .map(|(bot_id, stats)| {
                (
                    bot_id.clone(),
                    PlayerSnapshot {
                        territories: stats.territories,
                        power: stats.power,
                        total_units: stats.total_units,
                        score: stats.score(),
                    },
                )
            })
            .collect();
        self.turn_history.push(TurnRecord {
            turn: self.turn,
            players,
        });
    }

    /// Returns bots ranked by descending score.
    ///
    /// Ties break lexicographically by bot id: the stats map enumerates in
    /// that order and the sort is stable.
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self
            .player_stats
            .iter()
            .map(|(bot_id, stats)| LeaderboardEntry {
                bot_id: bot_id.clone(),
                score: stats.score(),
                territories: stats.territories,
                total_units: stats.total_units,
            })
            .collect();
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries
    }

    /// Replaces the turn rotation and resets the pointer to its start.
    pub fn set_turn_order(&mut self, order: Vec<String>) {
        self.turn_order = order;
        self.current_turn_index = 0;
    }

    /// Returns the bot whose turn it is, or `None` for an empty rotation.
    pub fn current_player(&self) -> Option<&str> {
        self.turn_order
            .get(self.current_turn_index)
            .map(String::as_str)
    }

    /// Advances to the next bot in the rotation. Wrapping past the end
    /// returns to the first bot and increments the turn counter, so `turn`
    /// counts full rotations rather than individual bot actions.
    pub fn next_turn(&mut self) {
        if self.turn_order.is_empty() {
            return;
        }
        self.current_turn_index += 1;
        if self.current_turn_index >= self.turn_order.len() {
            self.current_turn_index = 0;
            self.turn += 1;
        }
    }

    /// Resets the rotation pointer to the first bot.
    pub fn reset_turn_order(&mut self) {
        self.current_turn_index = 0;
    }
}
