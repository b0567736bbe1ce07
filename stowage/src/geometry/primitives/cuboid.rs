use crate::geometry::geo_traits::{CollidesWith, Surrounds};
use crate::geometry::primitives::{Point3, Rect};

/// Axis-aligned box inside the cargo hold.
/// `(x, y, z)` is the corner closest to the origin; `w`, `d` and `h` extend along width, depth and height.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Cuboid {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
    pub d: f64,
    pub h: f64,
}

impl Cuboid {
    pub fn new(x: f64, y: f64, z: f64, w: f64, d: f64, h: f64) -> Self {
        Cuboid { x, y, z, w, d, h }
    }

    /// Box of size `(w, d, h)` centered on `center`
    pub fn centered(center: Point3, w: f64, d: f64, h: f64) -> Self {
        Cuboid {
            x: center.0 - w / 2.0,
            y: center.1 - d / 2.0,
            z: center.2 - h / 2.0,
            w,
            d,
            h,
        }
    }

    /// Projection on the floor plane
    pub fn footprint(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.d)
    }

    pub fn centroid(&self) -> Point3 {
        Point3(
            self.x + self.w / 2.0,
            self.y + self.d / 2.0,
            self.z + self.h / 2.0,
        )
    }

    pub fn volume(&self) -> f64 {
        self.w * self.d * self.h
    }
}

impl CollidesWith<Cuboid> for Cuboid {
    #[inline(always)]
    fn collides_with(&self, other: &Cuboid, eps: f64) -> bool {
        !(self.x + self.w <= other.x + eps
            || other.x + other.w <= self.x + eps
            || self.y + self.d <= other.y + eps
            || other.y + other.d <= self.y + eps
            || self.z + self.h <= other.z + eps
            || other.z + other.h <= self.z + eps)
    }
}

impl Surrounds<Cuboid> for Cuboid {
    #[inline(always)]
    fn surrounds(&self, other: &Cuboid, eps: f64) -> bool {
        other.x >= self.x - eps
            && other.y >= self.y - eps
            && other.z >= self.z - eps
            && other.x + other.w <= self.x + self.w + eps
            && other.y + other.d <= self.y + self.d + eps
            && other.z + other.h <= self.z + self.h + eps
    }
}
