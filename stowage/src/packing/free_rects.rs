use crate::entities::Item;
use crate::geometry::geo_traits::{CollidesWith, Surrounds};
use crate::geometry::primitives::Rect;
use crate::geometry::quantize;

/// Unoccupied floor area of a single layer.
///
/// Represented as a list of axis-aligned rectangles which may overlap each other,
/// but of which none is fully contained in another (maximal rectangles).
#[derive(Clone, Debug)]
pub struct FreeRects {
    rects: Vec<Rect>,
    grid: f64,
    eps: f64,
}

impl FreeRects {
    /// Starts from the full `width` x `depth` floor and carves out every obstacle.
    pub fn seed(width: f64, depth: f64, obstacles: &[Rect], grid: f64, eps: f64) -> Self {
        let mut free_rects = FreeRects {
            rects: vec![Rect::new(
                0.0,
                0.0,
                quantize(width, grid),
                quantize(depth, grid),
            )],
            grid,
            eps,
        };
        for obstacle in obstacles {
            free_rects.occupy(&obstacle.quantized(grid));
        }
        free_rects
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Removes `placed` from the free area.
    pub fn occupy(&mut self, placed: &Rect) {
        self.split(placed);
        self.prune();
    }

    /// Replaces every free rectangle intersecting `placed` with the slivers of it
    /// left, right, in front of and behind `placed`.
    pub fn split(&mut self, placed: &Rect) {
        let mut split = Vec::with_capacity(self.rects.len() + 4);
        for fr in &self.rects {
            match fr.collides_with(placed, self.eps) {
                false => split.push(*fr),
                true => self.push_slivers(fr, placed, &mut split),
            }
        }
        self.rects = split;
    }

    fn push_slivers(&self, fr: &Rect, placed: &Rect, out: &mut Vec<Rect>) {
        let q = |v: f64| quantize(v, self.grid);
        let slivers = [
            //left
            Rect::new(fr.x, fr.y, q(f64::max(0.0, placed.x - fr.x)), fr.d),
            //right
            Rect::new(
                q(placed.x_max()),
                fr.y,
                q(f64::max(0.0, fr.x_max() - placed.x_max())),
                fr.d,
            ),
            //front
            Rect::new(fr.x, fr.y, fr.w, q(f64::max(0.0, placed.y - fr.y))),
            //back
            Rect::new(
                fr.x,
                q(placed.y_max()),
                fr.w,
                q(f64::max(0.0, fr.y_max() - placed.y_max())),
            ),
        ];

        for s in slivers {
            if s.w <= self.eps || s.d <= self.eps {
                continue;
            }
            //clip to the original free rectangle
            let x_min = q(f64::max(fr.x, s.x));
            let y_min = q(f64::max(fr.y, s.y));
            let x_max = q(f64::min(q(fr.x_max()), q(s.x_max())));
            let y_max = q(f64::min(q(fr.y_max()), q(s.y_max())));
            let (w, d) = (q(x_max - x_min), q(y_max - y_min));
            if w > self.eps && d > self.eps {
                out.push(Rect::new(x_min, y_min, w, d));
            }
        }
    }

    /// Removes every rectangle which is contained in another one.
    pub fn prune(&mut self) {
        let grid = self.grid;
        self.rects.iter_mut().for_each(|r| *r = r.quantized(grid));

        let mut i = 0;
        while i < self.rects.len() {
            let mut i_removed = false;
            let mut j = self.rects.len() - 1;
            while j > i {
                let (a, b) = (self.rects[i], self.rects[j]);
                if a.surrounds(&b, self.eps) {
                    self.rects.remove(j);
                } else if b.surrounds(&a, self.eps) {
                    self.rects.remove(i);
                    i_removed = true;
                    break;
                }
                j -= 1;
            }
            if !i_removed {
                i += 1;
            }
        }
    }

    /// Restricts the free area to the parts which lie on top of `support`.
    pub fn intersect_against(&self, support: &[Rect]) -> Vec<Rect> {
        intersect_lists(&self.rects, support, self.grid, self.eps)
    }
}

/// Pairwise intersections of two lists of rectangles, discarding slivers.
pub fn intersect_lists(a: &[Rect], b: &[Rect], grid: f64, eps: f64) -> Vec<Rect> {
    a.iter()
        .flat_map(|ra| b.iter().filter_map(move |rb| Rect::intersection(ra, rb, grid, eps)))
        .collect()
}

/// Best-area-fit search.
///
/// Out of all allowed rectangles and all orientations of `item`, picks the rectangle which
/// leaves the least area unused, breaking ties by the shortest leftover side.
/// Returns the realized footprint of the item, anchored at the origin of the chosen rectangle.
pub fn find_best_fit(item: &Item, allowed: &[Rect], grid: f64, eps: f64) -> Option<Rect> {
    let mut best: Option<(FitScore, Rect)> = None;

    for (cand_w, cand_d) in item.orientations() {
        for fr in allowed {
            if cand_w > fr.w + eps || cand_d > fr.d + eps {
                continue;
            }
            let score = FitScore {
                area_fit: fr.area() - cand_w * cand_d,
                short_fit: f64::min(fr.w - cand_w, fr.d - cand_d),
            };
            let improves = match &best {
                None => true,
                Some((best_score, _)) => score.improves_on(best_score, eps),
            };
            if improves {
                let footprint = Rect::new(fr.x, fr.y, quantize(cand_w, grid), quantize(cand_d, grid));
                best = Some((score, footprint));
            }
        }
    }

    best.map(|(_, footprint)| footprint)
}

#[derive(Clone, Copy, Debug)]
struct FitScore {
    area_fit: f64,
    short_fit: f64,
}

impl FitScore {
    fn improves_on(&self, other: &FitScore, eps: f64) -> bool {
        self.area_fit < other.area_fit
            || ((self.area_fit - other.area_fit).abs() < eps && self.short_fit < other.short_fit)
    }
}
