/// Geometric primitive representing a point in the cargo hold.
/// Axes: `.0` along the width, `.1` along the depth, `.2` along the height.
#[derive(Debug, Clone, PartialEq, Copy, Default)]
pub struct Point3(pub f64, pub f64, pub f64);

impl Point3 {
    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    pub fn z(&self) -> f64 {
        self.2
    }

    /// Rounds every coordinate to the nearest multiple of `step`
    pub fn snapped(self, step: f64) -> Point3 {
        let snap = |v: f64| (v / step).round() * step;
        Point3(snap(self.0), snap(self.1), snap(self.2))
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Point3(x, y, z)
    }
}

impl From<Point3> for (f64, f64, f64) {
    fn from(p: Point3) -> Self {
        (p.0, p.1, p.2)
    }
}
