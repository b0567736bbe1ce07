use crate::geometry::primitives::{Cuboid, Point3};
use crate::geometry::quantize;

/// The cargo hold items are loaded into.
/// Width runs along the x-axis, depth along the y-axis and height along the z-axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Container {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Container {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Container {
            width,
            height,
            depth,
        }
    }

    pub fn quantized(&self, grid: f64) -> Self {
        Container {
            width: quantize(self.width, grid),
            height: quantize(self.height, grid),
            depth: quantize(self.depth, grid),
        }
    }

    pub fn volume(&self) -> f64 {
        self.width * self.height * self.depth
    }

    /// Size of the container along (x, y, z)
    pub fn extents(&self) -> Point3 {
        Point3(self.width, self.depth, self.height)
    }

    /// The interior of the container as a box anchored at the origin
    pub fn bbox(&self) -> Cuboid {
        Cuboid::new(0.0, 0.0, 0.0, self.width, self.depth, self.height)
    }
}
