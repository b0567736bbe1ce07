use crate::entities::{Container, Placement};

/// Aggregate statistics of an arrangement
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LoadStats {
    /// Sum of the volumes of all placements
    pub used_volume: f64,
    /// Volume of the container
    pub total_volume: f64,
    pub total_weight: f64,
    /// Weighted mean of the placements' centers along the depth axis, 0 if nothing weighs anything
    pub center_of_mass: f64,
}

impl LoadStats {
    /// Fraction of the container volume which is occupied
    pub fn occupancy(&self) -> f64 {
        match self.total_volume > 0.0 {
            true => self.used_volume / self.total_volume,
            false => 0.0,
        }
    }
}

pub fn compute_stats<'a>(
    placements: impl IntoIterator<Item = &'a Placement>,
    container: &Container,
) -> LoadStats {
    let mut used_volume = 0.0;
    let mut total_weight = 0.0;
    let mut weighted_depth = 0.0;

    for p in placements {
        used_volume += p.volume();
        total_weight += p.weight;
        weighted_depth += (p.y + p.d / 2.0) * p.weight;
    }

    let center_of_mass = match total_weight != 0.0 {
        true => weighted_depth / total_weight,
        false => 0.0,
    };

    LoadStats {
        used_volume,
        total_volume: container.volume(),
        total_weight,
        center_of_mass,
    }
}
