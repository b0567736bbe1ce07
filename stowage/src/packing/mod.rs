mod free_rects;
mod layer;
mod packer;

#[doc(inline)]
pub use free_rects::FreeRects;
#[doc(inline)]
pub use free_rects::find_best_fit;
#[doc(inline)]
pub use free_rects::intersect_lists;
#[doc(inline)]
pub use layer::{LayerContext, PackState, SupportSet};
#[doc(inline)]
pub use packer::{LayeredPacker, PackSolution, pack};
