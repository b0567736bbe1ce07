use std::collections::HashMap;

use log::{debug, warn};
use slotmap::{SecondaryMap, SlotMap, new_key_type};

use crate::entities::{Container, LoadStats, Placement, compute_stats};
use crate::manual::edit::resolve_edit;
use crate::manual::{Edit, EditMode, EditOutcome, Pose};
use crate::packing::PackSolution;
use crate::util::PackerConfig;

new_key_type! {
    /// Unique key for each [`Placement`] in a [`ManualLayout`]
    pub struct PlacementKey;
}

/// A frozen arrangement which is hand-edited one placement at a time.
/// Every edit passes through the same constraints, so the arrangement stays collision-free
/// and inside the container.
#[derive(Clone, Debug)]
pub struct ManualLayout {
    pub container: Container,
    pub config: PackerConfig,
    /// Placements are only ever inserted on construction, so iteration follows insertion order
    placements: SlotMap<PlacementKey, Placement>,
    keys: HashMap<String, PlacementKey>,
    /// Last pose of every placement which satisfied all constraints
    last_valid: SecondaryMap<PlacementKey, Pose>,
    stats: LoadStats,
}

impl ManualLayout {
    pub fn new(
        container: Container,
        placements: impl IntoIterator<Item = Placement>,
        config: PackerConfig,
    ) -> Self {
        let mut layout = ManualLayout {
            container,
            config,
            placements: SlotMap::with_key(),
            keys: HashMap::new(),
            last_valid: SecondaryMap::new(),
            stats: LoadStats::default(),
        };
        for p in placements {
            if layout.keys.contains_key(&p.id) {
                warn!("[EDIT] duplicate placement id {}, ignoring", p.id);
                continue;
            }
            let pose = Pose::from(&p);
            let id = p.id.clone();
            let key = layout.placements.insert(p);
            layout.keys.insert(id, key);
            layout.last_valid.insert(key, pose);
        }
        layout.refresh_stats();
        layout
    }

    /// Freezes the result of a packing run
    pub fn from_solution(solution: &PackSolution, config: PackerConfig) -> Self {
        Self::new(solution.container, solution.placements.iter().cloned(), config)
    }

    /// Requests placement `id` to be moved to `pose`, see [`validate_edit`](crate::manual::validate_edit).
    /// Statistics are recomputed after every accepted edit.
    pub fn apply_edit(
        &mut self,
        id: &str,
        pose: Pose,
        mode: EditMode,
        snap: Option<f64>,
    ) -> EditOutcome {
        let Some(&key) = self.keys.get(id) else {
            warn!("[EDIT] no placement with id {id}, edit rejected");
            return EditOutcome {
                accepted: false,
                placement: None,
            };
        };

        let target = &self.placements[key];
        let others = self
            .placements
            .iter()
            .filter(|(k, _)| *k != key)
            .map(|(_, p)| p);
        let outcome = resolve_edit(
            target,
            others,
            pose,
            &self.container,
            mode,
            snap,
            &self.config,
        );

        if let (true, Some(moved)) = (outcome.accepted, &outcome.placement) {
            self.last_valid.insert(key, Pose::from(moved));
            self.placements[key] = moved.clone();
            self.refresh_stats();
        }
        outcome
    }

    pub fn apply(&mut self, edit: &Edit) -> EditOutcome {
        self.apply_edit(&edit.placement_id, edit.pose, edit.mode, edit.snap)
    }

    /// Removes placement `id` from the layout
    pub fn remove(&mut self, id: &str) -> Option<Placement> {
        let key = self.keys.remove(id)?;
        self.last_valid.remove(key);
        let removed = self.placements.remove(key);
        self.refresh_stats();
        debug!("[EDIT] removed {id}");
        removed
    }

    /// Removes all placements
    pub fn clear(&mut self) {
        self.placements.clear();
        self.keys.clear();
        self.last_valid.clear();
        self.refresh_stats();
    }

    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.placements.values()
    }

    pub fn get(&self, id: &str) -> Option<&Placement> {
        self.keys.get(id).map(|&k| &self.placements[k])
    }

    pub fn last_valid_pose(&self, id: &str) -> Option<Pose> {
        self.keys.get(id).and_then(|&k| self.last_valid.get(k).copied())
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    fn refresh_stats(&mut self) {
        self.stats = compute_stats(self.placements.values(), &self.container);
    }
}
