//! Read-only visualization snapshot.
//!
//! Exposes exactly what a renderer needs to draw the map as a graph:
//! per location its name, coordinates, type, owner, total unit count, and
//! adjacency. No mutation capability is granted.

use serde::{Deserialize, Serialize};

use crate::map::{GameState, LocationType};

/// A renderer-facing view of one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationView {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub location_type: LocationType,
    pub owner: Option<String>,
    pub total_units: u32,
    pub adjacent: Vec<String>,
}

/// Snapshots every location, ordered lexicographically by name.
pub fn map_snapshot(state: &GameState) -> Vec<LocationView> {
    state
        .locations
        .values()
        .map(|loc| LocationView {
            name: loc.name.clone(),
            x: loc.x,
            y: loc.y,
            location_type: loc.location_type,
            owner: loc.owner.clone(),
            total_units: loc.total_units(),
            adjacent: loc.adjacent.iter().cloned().collect(),
        })
        .collect()
}

/// Serializes the snapshot to JSON for external renderers.
pub fn snapshot_json(state: &GameState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&map_snapshot(state))
}
