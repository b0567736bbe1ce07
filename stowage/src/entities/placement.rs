use crate::entities::Item;
use crate::geometry::primitives::{Cuboid, Point3, Rect};

/// An [`Item`] that has been given a position inside the container.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    /// Id of the [`Item`] that was placed
    pub id: String,
    pub type_key: Option<String>,
    /// Corner closest to the origin of the unrotated box
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Realized dimensions, after the choice of orientation
    pub w: f64,
    pub h: f64,
    pub d: f64,
    pub weight: f64,
    pub stackable: bool,
    /// Rotation about the vertical axis in radians, only ever set by manual edits
    pub yaw: f64,
}

impl Placement {
    /// Places `item` with its corner at `position` and a realized footprint of `(w, d)`
    pub fn new(item: &Item, position: Point3, (w, d): (f64, f64)) -> Self {
        let Point3(x, y, z) = position;
        Placement {
            id: item.id.clone(),
            type_key: item.type_key.clone(),
            x,
            y,
            z,
            w,
            h: item.h,
            d,
            weight: item.weight,
            stackable: item.stackable,
            yaw: 0.0,
        }
    }

    pub fn position(&self) -> Point3 {
        Point3(self.x, self.y, self.z)
    }

    pub fn center(&self) -> Point3 {
        Point3(
            self.x + self.w / 2.0,
            self.y + self.d / 2.0,
            self.z + self.h / 2.0,
        )
    }

    /// Unrotated projection on the floor plane
    pub fn footprint(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.d)
    }

    /// Axis-aligned box occupied by the placement, accounting for its yaw
    pub fn bbox(&self) -> Cuboid {
        match self.yaw == 0.0 {
            true => Cuboid::new(self.x, self.y, self.z, self.w, self.d, self.h),
            false => {
                let (w, d) = yawed_extents(self.w, self.d, self.yaw);
                Cuboid::centered(self.center(), w, d, self.h)
            }
        }
    }

    pub fn volume(&self) -> f64 {
        self.w * self.h * self.d
    }

    pub fn group_key(&self) -> &str {
        self.type_key.as_deref().unwrap_or(&self.id)
    }
}

/// Width and depth of the bounding rectangle of a `w` x `d` footprint turned by `yaw` radians
pub fn yawed_extents(w: f64, d: f64, yaw: f64) -> (f64, f64) {
    if yaw == 0.0 {
        return (w, d);
    }
    let (sin, cos) = yaw.sin_cos();
    (
        (w * cos).abs() + (d * sin).abs(),
        (w * sin).abs() + (d * cos).abs(),
    )
}
