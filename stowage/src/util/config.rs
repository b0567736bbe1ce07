use serde::{Deserialize, Serialize};

/// Configuration of the layered packer and the manual-edit validator
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PackerConfig {
    /// Grid (in meters) to which all stored coordinates are rounded
    pub grid: f64,
    /// Tolerance used for floor-plane comparisons (fits, containment, degenerate slivers)
    pub epsilon: f64,
    /// Tolerance used for 3D collisions and footprint column counts
    pub collision_tolerance: f64,
    /// Maximum number of placements whose footprints may overlap in a single column
    pub max_stack_count: usize,
}

impl PackerConfig {
    pub const DEFAULT_GRID: f64 = 0.01;
    pub const DEFAULT_EPSILON: f64 = 1e-9;
    pub const DEFAULT_COLLISION_TOLERANCE: f64 = 1e-6;
    pub const DEFAULT_MAX_STACK_COUNT: usize = 2;
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            grid: Self::DEFAULT_GRID,
            epsilon: Self::DEFAULT_EPSILON,
            collision_tolerance: Self::DEFAULT_COLLISION_TOLERANCE,
            max_stack_count: Self::DEFAULT_MAX_STACK_COUNT,
        }
    }
}
