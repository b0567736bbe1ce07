use serde::{Deserialize, Serialize};
use stowage::io::ext_repr::ExtEdit;

use crate::catalog::{LoadLine, Package, Vehicle};

/// A load to be planned, together with the catalog it refers to
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtLoadRequest {
    /// The name of the load
    pub name: String,
    pub packages: Vec<Package>,
    pub vehicles: Vec<Vehicle>,
    /// Id of the vehicle to load
    pub vehicle_id: String,
    pub items: Vec<LoadLine>,
    /// Manual edits to apply to the packed arrangement, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edits: Vec<ExtEdit>,
}
