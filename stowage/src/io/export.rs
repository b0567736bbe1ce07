use std::time::Instant;

use crate::entities::{LoadStats, Placement};
use crate::io::ext_repr::{ExtEditOutcome, ExtPlacement, ExtSolution, ExtStats};
use crate::manual::EditOutcome;
use crate::packing::PackSolution;

/// Exports a solution out of the library
pub fn export(solution: &PackSolution, epoch: Instant) -> ExtSolution {
    ExtSolution {
        placements: solution.placements.iter().map(export_placement).collect(),
        stats: export_stats(&solution.stats),
        unplaced: solution.unplaced.clone(),
        run_time_ms: solution.time_stamp.duration_since(epoch).as_millis() as u64,
    }
}

pub fn export_placement(p: &Placement) -> ExtPlacement {
    ExtPlacement {
        id: p.id.clone(),
        type_key: p.type_key.clone(),
        x: p.x,
        y: p.y,
        z: p.z,
        width: p.w,
        height: p.h,
        depth: p.d,
        weight: p.weight,
        stackable: p.stackable,
        yaw: p.yaw,
    }
}

pub fn export_stats(stats: &LoadStats) -> ExtStats {
    ExtStats {
        used_volume: stats.used_volume,
        total_volume: stats.total_volume,
        total_weight: stats.total_weight,
        center_of_mass: stats.center_of_mass,
        occupancy: stats.occupancy(),
    }
}

pub fn export_edit_outcome(placement_id: &str, outcome: &EditOutcome) -> ExtEditOutcome {
    ExtEditOutcome {
        placement_id: placement_id.to_string(),
        accepted: outcome.accepted,
        placement: outcome.placement.as_ref().map(export_placement),
    }
}
