/// Trait for types that can detect collisions between `Self` and `T`.
///
/// Two primitives only collide if they interpenetrate by more than `eps` along every axis.
/// Primitives that merely touch (or overlap by less than `eps`) are not considered colliding.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T, eps: f64) -> bool;
}

/// Trait for types that can fully contain `T`, within a tolerance of `eps`.
pub trait Surrounds<T> {
    fn surrounds(&self, other: &T, eps: f64) -> bool;
}
