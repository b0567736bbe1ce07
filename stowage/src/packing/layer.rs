use std::collections::{HashMap, HashSet};

use float_cmp::approx_eq;

use crate::entities::{Container, Placement};
use crate::geometry::primitives::Rect;
use crate::packing::FreeRects;
use crate::util::PackerConfig;

/// Footprints left at the base elevation of the previous layer, grouped by type.
/// Consulted by items which may only rest on their own type.
#[derive(Clone, Debug, Default)]
pub struct SupportSet(HashMap<String, Vec<Rect>>);

impl SupportSet {
    /// Collects the footprints of all placements resting at `base_z`.
    pub fn at_elevation<'a>(placements: impl IntoIterator<Item = &'a Placement>, base_z: f64) -> Self {
        let mut support: HashMap<String, Vec<Rect>> = HashMap::new();
        for p in placements.into_iter().filter(|p| rests_at(p, base_z)) {
            support
                .entry(p.group_key().to_string())
                .or_default()
                .push(p.footprint());
        }
        SupportSet(support)
    }

    /// Footprints available for items grouped under `key`
    pub fn get(&self, key: &str) -> &[Rect] {
        self.0.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// State which is carried from one layer to the next during a packing run.
#[derive(Clone, Debug, Default)]
pub struct PackState {
    /// Elevation at which the next layer starts
    pub base_z: f64,
    /// Footprints of non-stackable items placed on the base of their layer.
    /// Excluded from the floor of every later layer.
    pub floor_obstacles: Vec<Rect>,
    /// Support footprints left by the previous layer
    pub support: SupportSet,
}

impl PackState {
    /// Closes the layer described by `ctx`, returning the state for the layer above it.
    pub fn advance(mut self, ctx: &LayerContext, placements: &[Placement], grid: f64) -> Self {
        let at_base = || placements.iter().filter(|p| rests_at(p, ctx.base_z));

        self.floor_obstacles
            .extend(at_base().filter(|p| !p.stackable).map(Placement::footprint));
        self.support = SupportSet::at_elevation(at_base(), ctx.base_z);
        self.base_z = crate::geometry::quantize(ctx.base_z + ctx.height, grid);
        self
    }
}

/// Working state of a single horizontal slab of the container.
#[derive(Clone, Debug)]
pub struct LayerContext {
    /// Elevation of the floor of this layer
    pub base_z: f64,
    /// Height of the slab, fixed by the tallest item that fits
    pub height: f64,
    /// Free floor area of this layer
    pub free_rects: FreeRects,
    /// Ids of the items placed while processing this layer
    pub placed: HashSet<String>,
}

impl LayerContext {
    pub fn new(
        container: &Container,
        state: &PackState,
        height: f64,
        config: &PackerConfig,
    ) -> Self {
        LayerContext {
            base_z: state.base_z,
            height,
            free_rects: FreeRects::seed(
                container.width,
                container.depth,
                &state.floor_obstacles,
                config.grid,
                config.epsilon,
            ),
            placed: HashSet::new(),
        }
    }

    pub fn is_ground(&self) -> bool {
        self.base_z <= 0.0
    }
}

/// True if the bottom of `p` lies at elevation `z`
fn rests_at(p: &Placement, z: f64) -> bool {
    approx_eq!(f64, p.z, z, epsilon = 1e-9, ulps = 4)
}
