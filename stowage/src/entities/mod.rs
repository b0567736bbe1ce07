mod container;
mod item;
mod placement;
mod stats;

#[doc(inline)]
pub use container::Container;
#[doc(inline)]
pub use item::Item;
#[doc(inline)]
pub use placement::Placement;
#[doc(inline)]
pub use placement::yawed_extents;
#[doc(inline)]
pub use stats::LoadStats;
#[doc(inline)]
pub use stats::compute_stats;
