use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

use crate::entities::{Container, LoadStats, Placement, compute_stats};
use crate::geometry::geo_traits::{CollidesWith, Surrounds};
//Checks on arrangements, used in debug_assert!() blocks and tests

/// True if no two placements overlap and all of them lie inside the container
pub fn placements_are_feasible(placements: &[Placement], container: &Container, tol: f64) -> bool {
    no_overlaps(placements, tol) && all_within_container(placements, container, tol)
}

pub fn no_overlaps(placements: &[Placement], tol: f64) -> bool {
    for (a, b) in placements.iter().tuple_combinations() {
        if a.bbox().collides_with(&b.bbox(), tol) {
            error!("placements {} and {} overlap: {:?} {:?}", a.id, b.id, a.bbox(), b.bbox());
            return false;
        }
    }
    true
}

pub fn all_within_container(placements: &[Placement], container: &Container, tol: f64) -> bool {
    let bounds = container.bbox();
    placements.iter().all(|p| {
        let inside = bounds.surrounds(&p.bbox(), tol);
        if !inside {
            error!("placement {} exceeds the container: {:?}", p.id, p.bbox());
        }
        inside
    })
}

/// True if, at the moment each placement was committed, fewer than `max_stack_count`
/// earlier placements overlapped its floor projection.
/// `placements` must be in commit order.
pub fn column_limit_respected(placements: &[Placement], max_stack_count: usize, tol: f64) -> bool {
    placements.iter().enumerate().all(|(i, p)| {
        let footprint = p.footprint();
        let n_below = placements[..i]
            .iter()
            .filter(|q| q.footprint().collides_with(&footprint, tol))
            .count();
        n_below < max_stack_count
    })
}

pub fn stats_match(stats: &LoadStats, placements: &[Placement], container: &Container) -> bool {
    let fresh = compute_stats(placements, container);
    approx_eq!(f64, stats.used_volume, fresh.used_volume, epsilon = 1e-9)
        && approx_eq!(f64, stats.total_volume, fresh.total_volume, epsilon = 1e-9)
        && approx_eq!(f64, stats.total_weight, fresh.total_weight, epsilon = 1e-9)
        && approx_eq!(f64, stats.center_of_mass, fresh.center_of_mass, epsilon = 1e-9)
}
