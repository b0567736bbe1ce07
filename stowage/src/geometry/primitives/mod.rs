mod cuboid;
mod point;
mod rect;

#[doc(inline)]
pub use cuboid::Cuboid;
#[doc(inline)]
pub use point::Point3;
#[doc(inline)]
pub use rect::Rect;
