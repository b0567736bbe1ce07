use std::time::Instant;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use stowage::io::export;
use stowage::io::ext_repr::{ExtEditOutcome, ExtItem, ExtPlacement, ExtSolution, ExtStats};

use crate::catalog::LoadLine;
use crate::config::PlanConfig;
use crate::io::ext_repr::ExtLoadRequest;
use crate::planner::{LoadPlan, PlanReport};

/// Record under which a planned load is saved
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SavedLoad {
    pub id: String,
    pub name: String,
    pub vehicle_id: String,
    pub items: Vec<LoadLine>,
    /// Moment the load was saved
    pub ts: Timestamp,
}

impl SavedLoad {
    pub fn new(request: &ExtLoadRequest, ts: Timestamp) -> Self {
        SavedLoad {
            id: format!("load_{}", ts.as_millisecond()),
            name: request.name.clone(),
            vehicle_id: request.vehicle_id.clone(),
            items: request.items.clone(),
            ts,
        }
    }
}

/// Arrangement after all manual edits were applied
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtManualLayout {
    pub placements: Vec<ExtPlacement>,
    pub stats: ExtStats,
    pub edits: Vec<ExtEditOutcome>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlanOutput {
    #[serde(flatten)]
    pub load: SavedLoad,
    /// The load lines expanded into individual units
    pub units: Vec<ExtItem>,
    pub report: PlanReport,
    pub solution: ExtSolution,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_layout: Option<ExtManualLayout>,
    pub config: PlanConfig,
}

impl PlanOutput {
    pub fn new(request: &ExtLoadRequest, plan: &LoadPlan, config: PlanConfig, epoch: Instant) -> Self {
        let manual_layout = plan.layout.as_ref().map(|layout| ExtManualLayout {
            placements: layout.placements().map(export::export_placement).collect(),
            stats: export::export_stats(&layout.stats()),
            edits: plan
                .edits
                .iter()
                .map(|(edit, outcome)| export::export_edit_outcome(&edit.placement_id, outcome))
                .collect(),
        });

        PlanOutput {
            load: SavedLoad::new(request, Timestamp::now()),
            units: plan.items.clone(),
            report: plan.report,
            solution: export::export(&plan.solution, epoch),
            manual_layout,
            config,
        }
    }
}
