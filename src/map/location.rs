//! Location types, unit bookkeeping, and resource invariants.
//!
//! A location is a node on the map with an optional owner, per-kind unit
//! counts, supply and crown tokens, and a fortification level. Mutation
//! methods either fail without touching state (`MapError`) or signal
//! insufficient resources through a `bool` no-op result.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The number of distinct unit kinds.
pub const UNIT_KIND_COUNT: usize = 4;

/// A kind of military unit.
///
/// The `#[repr(u8)]` attribute enables use as an array index into
/// `Location::units`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum UnitKind {
    Footman = 0,
    Knight = 1,
    SiegeEngine = 2,
    Boat = 3,
}

/// All unit kinds in index order.
pub const ALL_UNIT_KINDS: [UnitKind; UNIT_KIND_COUNT] = [
    UnitKind::Footman,
    UnitKind::Knight,
    UnitKind::SiegeEngine,
    UnitKind::Boat,
];

impl UnitKind {
    /// Returns the index of this kind into a per-location unit count array.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the lowercase display label.
    pub const fn label(self) -> &'static str {
        match self {
            UnitKind::Footman => "footman",
            UnitKind::Knight => "knight",
            UnitKind::SiegeEngine => "siege engine",
            UnitKind::Boat => "boat",
        }
    }
}

/// The terrain class of a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationType {
    Land,
    Sea,
}

/// A location's fortification level, conferring a fixed defense bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fortification {
    None,
    Castle,
    Stronghold,
}

impl Fortification {
    /// Returns the flat defense bonus this fortification grants.
    pub const fn defense_bonus(self) -> u32 {
        match self {
            Fortification::None => 0,
            Fortification::Castle => 1,
            Fortification::Stronghold => 2,
        }
    }
}

/// Errors raised by map mutations that would corrupt ownership state.
///
/// Both variants leave the location unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("cannot add {attempted}'s units to {location}: already controlled by {owner}")]
    OwnershipConflict {
        location: String,
        owner: String,
        attempted: String,
    },

    #[error("cannot change owner of {location}: still has {units} units")]
    NotClearable { location: String, units: u32 },
}

/// A location on the map.
///
/// `name` is the unique key; `x`/`y` are display-only coordinates with no
/// gameplay meaning. Adjacency is stored as an ordered set of neighbor
/// names so enumeration order is deterministic (lexicographic).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub location_type: LocationType,
    pub owner: Option<String>,
    /// Unit count per kind, indexed by `UnitKind::index()`.
    pub units: [u32; UNIT_KIND_COUNT],
    pub adjacent: BTreeSet<String>,
    pub supply: u32,
    pub max_supply: u32,
    pub crowns: u32,
    pub fortification: Fortification,
}

impl Location {
    /// Creates an unowned, empty location with `max_supply` 1.
    pub fn new(name: impl Into<String>, location_type: LocationType) -> Self {
        Location {
            name: name.into(),
            x: 0.0,
            y: 0.0,
            location_type,
            owner: None,
            units: [0; UNIT_KIND_COUNT],
            adjacent: BTreeSet::new(),
            supply: 0,
            max_supply: 1,
            crowns: 0,
            fortification: Fortification::None,
        }
    }

    /// Sets display coordinates.
    pub fn with_coords(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Sets the supply cap. Clamped to at least 1.
    pub fn with_max_supply(mut self, max_supply: u32) -> Self {
        self.max_supply = max_supply.max(1);
        self
    }

    /// Sets the fortification level at creation.
    pub fn with_fortification(mut self, fortification: Fortification) -> Self {
        self.fortification = fortification;
        self
    }

    /// Returns the total unit count across all kinds.
    pub fn total_units(&self) -> u32 {
        self.units.iter().sum()
    }

    /// Returns true if the location holds at least one unit.
    pub fn has_units(&self) -> bool {
        self.total_units() > 0
    }

    /// Adds `count` units of the given kind.
    ///
    /// If `owner` is given and the location is unowned, ownership is
    /// assigned (first owner wins). If `owner` conflicts with the current
    /// owner, fails with `OwnershipConflict` and nothing is mutated.
    pub fn add_units(
        &mut self,
        kind: UnitKind,
        count: u32,
        owner: Option<&str>,
    ) -> Result<(), MapError> {
        if let Some(owner) = owner {
            match &self.owner {
                None => self.owner = Some(owner.to_string()),
                Some(current) if current != owner => {
                    return Err(MapError::OwnershipConflict {
                        location: self.name.clone(),
                        owner: current.clone(),
                        attempted: owner.to_string(),
                    });
                }
                Some(_) => {}
            }
        }
        self.units[kind.index()] += count;
        Ok(())
    }

    /// Removes `count` units of the given kind.
    ///
    /// Returns false (and mutates nothing) if fewer than `count` are present.
    pub fn remove_units(&mut self, kind: UnitKind, count: u32) -> bool {
        let current = self.units[kind.index()];
        if current < count {
            return false;
        }
        self.units[kind.index()] = current - count;
        true
    }

    /// Replaces the owner. Only legal while the location holds no units;
    /// there is no prior-owner check, so conquered and emptied territory
    /// transfers unconditionally.
    pub fn set_owner(&mut self, new_owner: impl Into<String>) -> Result<(), MapError> {
        if self.has_units() {
            return Err(MapError::NotClearable {
                location: self.name.clone(),
                units: self.total_units(),
            });
        }
        self.owner = Some(new_owner.into());
        Ok(())
    }

    /// Adds supply, clamping at `max_supply`.
    ///
    /// Returns true if the full amount was applied; false means the supply
    /// was set to the cap and the remainder discarded. Not an error.
    pub fn add_supply(&mut self, amount: u32) -> bool {
        if self.supply + amount > self.max_supply {
            self.supply = self.max_supply;
            return false;
        }
        self.supply += amount;
        true
    }

    /// Removes supply. Returns false (no mutation) if insufficient.
    pub fn remove_supply(&mut self, amount: u32) -> bool {
        if self.supply < amount {
            return false;
        }
        self.supply -= amount;
        true
    }

    /// Adds crowns. Unbounded above.
    pub fn add_crowns(&mut self, amount: u32) {
        self.crowns += amount;
    }

    /// Removes crowns. Returns false (no mutation) if insufficient.
    pub fn remove_crowns(&mut self, amount: u32) -> bool {
        if self.crowns < amount {
            return false;
        }
        self.crowns -= amount;
        true
    }

    /// Returns the defense bonus from the current fortification.
    pub fn defense_bonus(&self) -> u32 {
        self.fortification.defense_bonus()
    }

    /// Upgrades or downgrades the fortification.
    pub fn set_fortification(&mut self, fortification: Fortification) {
        self.fortification = fortification;
    }
}
