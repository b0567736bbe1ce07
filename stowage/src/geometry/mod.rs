pub mod geo_enums;
pub mod geo_traits;
pub mod primitives;

mod quantize;

#[doc(inline)]
pub use quantize::quantize;
