use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::geo_traits::{CollidesWith, Surrounds};
use crate::geometry::quantize;

/// Axis-aligned rectangle in the floor plane of the cargo hold.
/// `(x, y)` is the corner closest to the origin, `w` extends along the width axis and `d` along the depth axis.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub d: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, d: f64) -> Self {
        Rect { x, y, w, d }
    }

    pub fn x_max(&self) -> f64 {
        self.x + self.w
    }

    pub fn y_max(&self) -> f64 {
        self.y + self.d
    }

    pub fn area(&self) -> f64 {
        self.w * self.d
    }

    /// Returns a copy with every field rounded to the grid
    pub fn quantized(&self, grid: f64) -> Rect {
        Rect {
            x: quantize(self.x, grid),
            y: quantize(self.y, grid),
            w: quantize(self.w, grid),
            d: quantize(self.d, grid),
        }
    }

    /// Returns the geometric relation between `self` and another [`Rect`].
    /// In edge cases, leans towards `Surrounding` and `Enclosed` instead of `Intersecting`.
    pub fn relation_to(&self, other: &Rect, eps: f64) -> GeoRelation {
        if !self.collides_with(other, eps) {
            return GeoRelation::Disjoint;
        }
        if self.surrounds(other, eps) {
            return GeoRelation::Surrounding;
        }
        if other.surrounds(self, eps) {
            return GeoRelation::Enclosed;
        }
        GeoRelation::Intersecting
    }

    /// Returns the quantized overlap of `a` and `b`, if it is wider and deeper than `eps`.
    pub fn intersection(a: &Rect, b: &Rect, grid: f64, eps: f64) -> Option<Rect> {
        let x_min = f64::max(a.x, b.x);
        let y_min = f64::max(a.y, b.y);
        let x_max = f64::min(a.x_max(), b.x_max());
        let y_max = f64::min(a.y_max(), b.y_max());
        let w = quantize(x_max - x_min, grid);
        let d = quantize(y_max - y_min, grid);
        match w > eps && d > eps {
            true => Some(Rect {
                x: quantize(x_min, grid),
                y: quantize(y_min, grid),
                w,
                d,
            }),
            false => None,
        }
    }
}

impl CollidesWith<Rect> for Rect {
    #[inline(always)]
    fn collides_with(&self, other: &Rect, eps: f64) -> bool {
        !(self.x_max() <= other.x + eps
            || other.x_max() <= self.x + eps
            || self.y_max() <= other.y + eps
            || other.y_max() <= self.y + eps)
    }
}

impl Surrounds<Rect> for Rect {
    #[inline(always)]
    fn surrounds(&self, other: &Rect, eps: f64) -> bool {
        other.x >= self.x - eps
            && other.y >= self.y - eps
            && other.x_max() <= self.x_max() + eps
            && other.y_max() <= self.y_max() + eps
    }
}
