use serde::{Deserialize, Serialize};

use crate::manual::EditMode;

/// External representation of a [`Container`](crate::entities::Container).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtContainer {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtItem {
    /// Unique identifier of the item
    pub id: String,
    /// Items with the same type key can support each other
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_key: Option<String>,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    #[serde(default)]
    pub weight: f64,
    /// Other items may be put on top of this item
    #[serde(default)]
    pub stackable: bool,
    /// The item may be turned by 90° around the vertical axis
    #[serde(default)]
    pub rotatable: bool,
    /// Units of the same type have to be stacked on top of this item
    #[serde(default)]
    pub must_stack: bool,
    /// Above the floor, the item may only rest on items of its own type
    #[serde(default)]
    pub self_stack_only: bool,
}

/// A set of items to be loaded into a container
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    pub container: ExtContainer,
    pub items: Vec<ExtItem>,
}

/// External representation of a [`Placement`](crate::entities::Placement).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacement {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_key: Option<String>,
    /// Corner of the unrotated box closest to the origin
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub weight: f64,
    pub stackable: bool,
    /// Rotation around the vertical axis in radians
    #[serde(default)]
    pub yaw: f64,
}

/// External representation of [`LoadStats`](crate::entities::LoadStats).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtStats {
    pub used_volume: f64,
    pub total_volume: f64,
    pub total_weight: f64,
    /// Along the depth axis
    pub center_of_mass: f64,
    pub occupancy: f64,
}

/// External representation of a [`PackSolution`](crate::packing::PackSolution).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    pub placements: Vec<ExtPlacement>,
    pub stats: ExtStats,
    /// Ids of the items which could not be placed
    pub unplaced: Vec<String>,
    /// The time it took to generate the solution in milliseconds
    pub run_time_ms: u64,
}

/// Request to move a placement by hand
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtEdit {
    pub placement_id: String,
    pub mode: EditMode,
    /// Requested center of the placement's box
    pub center: [f64; 3],
    /// Euler angles (roll, pitch, yaw) in radians
    #[serde(default)]
    pub rotation: [f64; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snap: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtEditOutcome {
    pub placement_id: String,
    pub accepted: bool,
    /// The placement after the edit, absent if the id is unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<ExtPlacement>,
}
