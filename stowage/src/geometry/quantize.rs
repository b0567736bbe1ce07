/// Rounds `x` to the nearest multiple of `grid`, clamped to be non-negative.
#[inline(always)]
pub fn quantize(x: f64, grid: f64) -> f64 {
    f64::max(0.0, (x / grid).round() * grid)
}
