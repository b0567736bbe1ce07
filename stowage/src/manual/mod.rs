mod edit;
mod layout;

#[doc(inline)]
pub use edit::{Edit, EditMode, EditOutcome, Pose, validate_edit};
#[doc(inline)]
pub use layout::{ManualLayout, PlacementKey};
