use serde::{Deserialize, Serialize};
use stowage::util::PackerConfig;

/// Configuration for the load planner
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PlanConfig {
    /// Configuration of the layered packer, also used to validate manual edits
    pub packer: PackerConfig,
    /// Grid manual translations snap to when an edit does not specify one. No snapping if undefined
    pub snap: Option<f64>,
    /// A vehicle counts as full once the free volume drops below this value (m³)
    pub full_tolerance: f64,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            packer: PackerConfig::default(),
            snap: Some(0.01),
            full_tolerance: 1e-6,
        }
    }
}
