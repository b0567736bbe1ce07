/// Set of possible relations between two geometric primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeoRelation {
    /// The primitives do not overlap
    Disjoint,
    /// `self` fully contains the other primitive
    Surrounding,
    /// `self` is fully contained by the other primitive
    Enclosed,
    /// The primitives overlap partially
    Intersecting,
}
