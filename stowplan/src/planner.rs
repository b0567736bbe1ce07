use anyhow::{Context, Result, bail};
use itertools::Itertools;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use stowage::entities::Item;
use stowage::io::ext_repr::ExtItem;
use stowage::io::import;
use stowage::manual::{Edit, EditOutcome, ManualLayout};
use stowage::packing::{PackSolution, pack};
use thousands::Separable;

use crate::catalog::{Vehicle, expand_load};
use crate::config::PlanConfig;
use crate::io::ext_repr::ExtLoadRequest;

/// Flags describing how well a load fits its vehicle
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanReport {
    /// Every unit of the load found a place
    pub all_placed: bool,
    /// Nothing more can be added: either some units did not fit, or the cargo hold is filled completely
    pub vehicle_full: bool,
    /// The load weighs more than the vehicle's maximum payload
    pub overweight: bool,
}

impl PlanReport {
    pub fn new(solution: &PackSolution, vehicle: &Vehicle, full_tolerance: f64) -> Self {
        let stats = &solution.stats;
        let all_placed = solution.all_placed();
        PlanReport {
            all_placed,
            vehicle_full: !all_placed || stats.used_volume >= stats.total_volume - full_tolerance,
            overweight: vehicle
                .max_weight()
                .is_some_and(|max| stats.total_weight > max),
        }
    }
}

/// Everything produced while planning one load
pub struct LoadPlan {
    pub vehicle: Vehicle,
    /// The load lines expanded into individual units
    pub items: Vec<ExtItem>,
    pub solution: PackSolution,
    pub report: PlanReport,
    /// The hand-edited arrangement, if any edits were requested
    pub layout: Option<ManualLayout>,
    /// Outcome of every requested edit, in request order
    pub edits: Vec<(Edit, EditOutcome)>,
}

pub struct LoadPlanner {
    pub config: PlanConfig,
}

impl LoadPlanner {
    pub fn new(config: PlanConfig) -> Self {
        Self { config }
    }

    pub fn plan(&self, request: &ExtLoadRequest) -> Result<LoadPlan> {
        let Some(vehicle) = request.vehicles.iter().find(|v| v.id == request.vehicle_id) else {
            bail!("vehicle {} is not part of the request", request.vehicle_id)
        };
        let container = vehicle
            .container()
            .with_context(|| format!("invalid interior for vehicle {}", vehicle.id))?;

        let ext_items = expand_load(&request.items, &request.packages)?;
        let items: Vec<Item> = import::import_items(&ext_items)?;
        info!(
            "[PLAN] loading {} unit(s) from {} load line(s) into {} ({}x{}x{} m)",
            items.len().separate_with_commas(),
            request.items.len(),
            vehicle.name,
            container.width,
            container.height,
            container.depth
        );

        let solution = pack(&container, &items, &self.config.packer);
        let report = PlanReport::new(&solution, vehicle, self.config.full_tolerance);

        if !report.all_placed {
            warn!(
                "[PLAN] {} unit(s) did not fit: {}",
                solution.unplaced.len().separate_with_commas(),
                solution.unplaced.iter().join(", ")
            );
        }
        if report.vehicle_full {
            warn!("[PLAN] vehicle {} is full", vehicle.id);
        }
        if report.overweight {
            warn!(
                "[PLAN] load of {:.1} kg exceeds the payload of vehicle {} ({} t)",
                solution.stats.total_weight, vehicle.id, vehicle.max_weight_t
            );
        }

        let edits = import::import_edits(&request.edits)?;
        let (layout, edits) = match edits.is_empty() {
            true => (None, vec![]),
            false => {
                let (layout, outcomes) = self.apply_edits(&solution, edits);
                (Some(layout), outcomes)
            }
        };

        Ok(LoadPlan {
            vehicle: vehicle.clone(),
            items: ext_items,
            solution,
            report,
            layout,
            edits,
        })
    }

    /// Freezes `solution` and applies the edits one after the other
    fn apply_edits(
        &self,
        solution: &PackSolution,
        edits: Vec<Edit>,
    ) -> (ManualLayout, Vec<(Edit, EditOutcome)>) {
        let mut layout = ManualLayout::from_solution(solution, self.config.packer);
        let outcomes = edits
            .into_iter()
            .map(|mut edit| {
                edit.snap = edit.snap.or(self.config.snap);
                let outcome = layout.apply(&edit);
                (edit, outcome)
            })
            .collect_vec();

        let n_accepted = outcomes.iter().filter(|(_, o)| o.accepted).count();
        info!(
            "[PLAN] {}/{} manual edit(s) accepted, occupancy {:.1}%",
            n_accepted,
            outcomes.len(),
            layout.stats().occupancy() * 100.0
        );
        (layout, outcomes)
    }
}
