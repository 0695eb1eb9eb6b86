//! Map representation and game-state types.
//!
//! Contains the core data structures for locations, units, adjacency,
//! orders, and the overall game state.

pub mod location;
pub mod order;
pub mod state;

pub use location::{
    Fortification, Location, LocationType, MapError, UnitKind, ALL_UNIT_KINDS, UNIT_KIND_COUNT,
};
pub use order::{Order, OrderType};
pub use state::{GameState, LeaderboardEntry, PlayerSnapshot, PlayerStats, TurnRecord};
