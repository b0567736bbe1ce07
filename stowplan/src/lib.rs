use std::sync::LazyLock;
use std::time::Instant;

/// Package and vehicle records, and the expansion of load lines into items
pub mod catalog;
pub mod config;
pub mod io;
/// Drives a packing run and the manual edits that follow it
pub mod planner;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
