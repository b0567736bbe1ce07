use std::cmp::Reverse;
use std::collections::HashSet;
use std::time::Instant;

use itertools::Itertools;
use log::{debug, info, warn};
use ordered_float::OrderedFloat;

use crate::entities::{Container, Item, LoadStats, Placement, compute_stats};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Cuboid, Point3, Rect};
use crate::geometry::quantize;
use crate::packing::free_rects::find_best_fit;
use crate::packing::{LayerContext, PackState};
use crate::util::{PackerConfig, assertions};

/// Result of a packing run.
#[derive(Clone, Debug)]
pub struct PackSolution {
    /// The container the items were packed into, rounded to the grid
    pub container: Container,
    /// Placements in the order they were committed
    pub placements: Vec<Placement>,
    pub stats: LoadStats,
    /// Ids of the input items which did not end up in the container, in input order
    pub unplaced: Vec<String>,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl PackSolution {
    pub fn all_placed(&self) -> bool {
        self.unplaced.is_empty()
    }
}

/// Packs `items` into `container`, see [`LayeredPacker`].
pub fn pack(container: &Container, items: &[Item], config: &PackerConfig) -> PackSolution {
    LayeredPacker::new(*container, items, *config).solve()
}

/// Loads a container layer by layer.
///
/// Every layer is a horizontal slab whose height is fixed by the tallest pending item which still fits.
/// Within a layer, the free floor area is tracked as a set of maximal rectangles and every item is
/// placed in the rectangle which fits it best.
/// Items which must be stacked are placed first, immediately followed by the units stacked on top of them.
pub struct LayeredPacker {
    pub container: Container,
    pub config: PackerConfig,
    /// Ids of all input items, in input order
    input_ids: Vec<String>,
    /// Items still waiting to be placed, ordered by height and footprint area (descending)
    pending: Vec<Item>,
    placements: Vec<Placement>,
}

impl LayeredPacker {
    pub fn new(container: Container, items: &[Item], config: PackerConfig) -> Self {
        let container = container.quantized(config.grid);
        let input_ids = items.iter().map(|i| i.id.clone()).collect_vec();

        let mut pending = items
            .iter()
            .map(|i| i.quantized(config.grid))
            .filter(|i| {
                let degenerate = i.is_degenerate(config.epsilon);
                if degenerate {
                    debug!("[PACK] discarding item {} with degenerate dimensions", i.id);
                }
                !degenerate
            })
            .collect_vec();
        sort_pending(&mut pending);

        Self {
            container,
            config,
            input_ids,
            pending,
            placements: vec![],
        }
    }

    pub fn solve(mut self) -> PackSolution {
        let start = Instant::now();
        let n_items = self.input_ids.len();

        let mut state = PackState::default();
        let mut n_layers = 0;

        while !self.pending.is_empty() {
            let Some(mut ctx) = self.open_layer(&state) else {
                debug!("[PACK] no pending item fits above z={:.2}", state.base_z);
                break;
            };

            let pool = self.layer_pool(&state);
            self.place_mandatory_stacks(&mut ctx, &state, &pool);
            self.place_remaining(&mut ctx, &state, &pool);

            n_layers += 1;
            debug!(
                "[PACK] layer {} at z={:.2} (height {:.2}): {} item(s) placed",
                n_layers,
                ctx.base_z,
                ctx.height,
                ctx.placed.len()
            );

            state = state.advance(&ctx, &self.placements, self.config.grid);

            if ctx.placed.is_empty() {
                debug!("[PACK] layer {n_layers} stalled, stopping");
                break;
            }
        }

        debug_assert!(assertions::placements_are_feasible(
            &self.placements,
            &self.container,
            self.config.collision_tolerance
        ));

        let stats = compute_stats(&self.placements, &self.container);
        let placed_ids: HashSet<&str> = self.placements.iter().map(|p| p.id.as_str()).collect();
        let unplaced = self
            .input_ids
            .iter()
            .filter(|id| !placed_ids.contains(id.as_str()))
            .cloned()
            .collect_vec();

        info!(
            "[PACK] placed {}/{} items in {} layer(s) in {:.3}ms, occupancy {:.1}%",
            self.placements.len(),
            n_items,
            n_layers,
            start.elapsed().as_secs_f64() * 1000.0,
            stats.occupancy() * 100.0
        );

        PackSolution {
            container: self.container,
            placements: self.placements,
            stats,
            unplaced,
            time_stamp: Instant::now(),
        }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Sets up the next layer, or `None` if no pending item fits in the remaining height.
    fn open_layer(&self, state: &PackState) -> Option<LayerContext> {
        let remaining = self.remaining_height(state);
        if remaining <= self.config.epsilon {
            return None;
        }
        let anchor = self
            .pending
            .iter()
            .find(|i| i.h <= remaining + self.config.epsilon)?;

        Some(LayerContext::new(
            &self.container,
            state,
            anchor.h,
            &self.config,
        ))
    }

    fn remaining_height(&self, state: &PackState) -> f64 {
        quantize(self.container.height - state.base_z, self.config.grid)
    }

    /// Snapshot of the pending items which fit within the remaining height, taken when a layer opens
    fn layer_pool(&self, state: &PackState) -> Vec<Item> {
        let remaining = self.remaining_height(state);
        self.pending
            .iter()
            .filter(|i| i.h <= remaining + self.config.epsilon)
            .cloned()
            .collect_vec()
    }

    /// Phase 1: items which must be stacked, each immediately followed by the units stacked on top of it.
    fn place_mandatory_stacks(&mut self, ctx: &mut LayerContext, state: &PackState, pool: &[Item]) {
        let candidates = pool
            .iter()
            .filter(|i| i.must_stack)
            .sorted_by_key(|i| Reverse(OrderedFloat(i.footprint_area())))
            .collect_vec();

        for item in candidates {
            if ctx.placed.contains(&item.id) || !self.is_pending(&item.id) {
                continue;
            }
            let allowed = match ctx.is_ground() {
                true => ctx.free_rects.rects().to_vec(),
                false => ctx
                    .free_rects
                    .intersect_against(state.support.get(item.group_key())),
            };
            if allowed.is_empty() {
                continue;
            }
            let Some(footprint) = self.find_position(item, &allowed, ctx.base_z) else {
                continue;
            };

            let base = self.commit(item, footprint, ctx.base_z, ctx);
            ctx.free_rects.occupy(&footprint);

            match base.stackable {
                false => warn!(
                    "[PACK] item {} must be stacked but is not stackable, nothing will be stacked on it",
                    base.id
                ),
                true => {
                    let z_top = quantize(ctx.base_z + base.h, self.config.grid);
                    self.stack_column(base.group_key().to_string(), footprint, z_top, ctx);
                }
            }
        }
    }

    /// Stacks pending units of group `key` on top of the column with `footprint`, starting at `z_top`.
    fn stack_column(&mut self, key: String, footprint: Rect, mut z_top: f64, ctx: &mut LayerContext) {
        while let Some(next) = self.take_next_of_group(&key) {
            let candidate = Cuboid::new(footprint.x, footprint.y, z_top, footprint.w, footprint.d, next.h);
            let fits = z_top + next.h <= self.container.height + self.config.epsilon
                && !self.collides(&candidate)
                && self.column_has_room(&footprint);

            if !fits {
                self.restore_pending(next);
                break;
            }

            let top = self.commit(&next, footprint, z_top, ctx);
            z_top = quantize(z_top + top.h, self.config.grid);
        }
    }

    /// Phase 2: all other items that fit within this layer.
    fn place_remaining(&mut self, ctx: &mut LayerContext, state: &PackState, pool: &[Item]) {
        let candidates = pool
            .iter()
            .filter(|i| !ctx.placed.contains(&i.id) && !i.must_stack)
            .sorted_by_key(|i| Reverse(OrderedFloat(i.footprint_area())))
            .collect_vec();

        for item in candidates {
            if !self.is_pending(&item.id) {
                continue;
            }
            let allowed = match item.self_stack_only && !ctx.is_ground() {
                false => ctx.free_rects.rects().to_vec(),
                true => ctx
                    .free_rects
                    .intersect_against(state.support.get(item.group_key())),
            };
            if allowed.is_empty() {
                continue;
            }
            let Some(footprint) = self.find_position(item, &allowed, ctx.base_z) else {
                continue;
            };

            self.commit(item, footprint, ctx.base_z, ctx);
            ctx.free_rects.occupy(&footprint);
        }
    }

    /// Searches the best floor position for `item` at elevation `base_z`,
    /// verifying the height limit, 3D collisions and the footprint column limit.
    fn find_position(&self, item: &Item, allowed: &[Rect], base_z: f64) -> Option<Rect> {
        let (grid, eps) = (self.config.grid, self.config.epsilon);
        if base_z + item.h > self.container.height + eps {
            return None;
        }
        let footprint = find_best_fit(item, allowed, grid, eps)?;

        let z = quantize(base_z, grid);
        let candidate = Cuboid::new(footprint.x, footprint.y, z, footprint.w, footprint.d, item.h);

        let valid = z + item.h <= self.container.height + eps
            && !self.collides(&candidate)
            && self.column_has_room(&footprint);

        valid.then_some(footprint)
    }

    /// Records the placement of `item` and removes it from the pending items.
    fn commit(&mut self, item: &Item, footprint: Rect, z: f64, ctx: &mut LayerContext) -> Placement {
        let z = quantize(z, self.config.grid);
        let placement = Placement::new(item, Point3(footprint.x, footprint.y, z), (footprint.w, footprint.d));

        debug!(
            "[PACK] placing item {} at ({:.2}, {:.2}, {:.2}) with footprint {:.2}x{:.2}",
            item.id, footprint.x, footprint.y, z, footprint.w, footprint.d
        );

        self.pending.retain(|i| i.id != item.id);
        ctx.placed.insert(item.id.clone());
        self.placements.push(placement.clone());
        placement
    }

    fn collides(&self, candidate: &Cuboid) -> bool {
        let tol = self.config.collision_tolerance;
        self.placements
            .iter()
            .any(|p| p.bbox().collides_with(candidate, tol))
    }

    /// Number of placements whose floor projection overlaps `footprint`, regardless of height
    pub fn column_count(&self, footprint: &Rect) -> usize {
        let tol = self.config.collision_tolerance;
        self.placements
            .iter()
            .filter(|p| p.bbox().footprint().collides_with(footprint, tol))
            .count()
    }

    fn column_has_room(&self, footprint: &Rect) -> bool {
        self.column_count(footprint) < self.config.max_stack_count
    }

    fn is_pending(&self, id: &str) -> bool {
        self.pending.iter().any(|i| i.id == id)
    }

    /// Takes the first pending unit of group `key` which must be stacked
    fn take_next_of_group(&mut self, key: &str) -> Option<Item> {
        let idx = self
            .pending
            .iter()
            .position(|i| i.must_stack && i.group_key() == key)?;
        Some(self.pending.remove(idx))
    }

    fn restore_pending(&mut self, item: Item) {
        self.pending.push(item);
        sort_pending(&mut self.pending);
    }
}

/// Stable sort by height, then footprint area, both descending
fn sort_pending(pending: &mut [Item]) {
    pending.sort_by_key(|i| (Reverse(OrderedFloat(i.h)), Reverse(OrderedFloat(i.footprint_area()))));
}
