//! Layered 3D packing of rectangular items into a vehicle cargo hold, plus a
//! constraint validator for hand-editing the resulting arrangement.

/// Entities to model containers, items, placements and load statistics
pub mod entities;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Importing load instances into and exporting solutions out of this library
pub mod io;

/// Hand-editing of a frozen arrangement
pub mod manual;

/// The layered free-rectangle packer
pub mod packing;

/// Helper functions which do not belong to any specific module
pub mod util;
